use comfy_table::{Cell, Color};

use crate::core::Pledge;
use crate::output::format::{create_styled_table, header_cell};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy)]
pub(crate) struct HistoryOptions {
    pub(crate) use_color: bool,
    pub(crate) timezone: Timezone,
}

/// Stored pledges, oldest first
pub(crate) fn render_history_table(ledger: &[Pledge], options: HistoryOptions) -> String {
    if ledger.is_empty() {
        return "No pledges recorded.".to_string();
    }
    let c = options.use_color;

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Time", c),
        header_cell("Name", c),
        header_cell("Action", c),
        header_cell("Why", c),
    ]);

    let muted = if c { Some(Color::DarkGrey) } else { None };
    for pledge in ledger {
        let mut why = Cell::new(pledge.why());
        if let Some(color) = muted {
            why = why.fg(color);
        }
        table.add_row(vec![
            Cell::new(options.timezone.format_minutes(pledge.timestamp())),
            Cell::new(pledge.name()),
            Cell::new(pledge.action()),
            why,
        ]);
    }

    format!("\n  Pledge History\n\n{table}\n")
}

/// The ledger exactly as stored
pub(crate) fn output_history_json(ledger: &[Pledge]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ledger)
}
