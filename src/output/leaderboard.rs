use comfy_table::{Cell, Color};

use crate::consts::EMPTY_LEADERBOARD;
use crate::core::LeaderboardEntry;
use crate::output::format::{
    NumberFormat, create_styled_table, format_number, header_cell, right_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeaderboardOptions {
    pub(crate) use_color: bool,
    pub(crate) limit: Option<usize>,
    pub(crate) number_format: NumberFormat,
}

fn visible(entries: &[LeaderboardEntry], limit: Option<usize>) -> &[LeaderboardEntry] {
    match limit {
        Some(n) if n < entries.len() => &entries[..n],
        _ => entries,
    }
}

/// Ranked table, or the placeholder line when nobody has pledged
pub(crate) fn render_leaderboard_table(
    entries: &[LeaderboardEntry],
    options: LeaderboardOptions,
) -> String {
    if entries.is_empty() {
        return EMPTY_LEADERBOARD.to_string();
    }
    let c = options.use_color;

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Rank", c),
        header_cell("Action", c),
        header_cell("Pledges", c),
    ]);

    let leader_color = if c { Some(Color::Green) } else { None };
    for (i, entry) in visible(entries, options.limit).iter().enumerate() {
        let lead = i == 0;
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None, false),
            Cell::new(&entry.action),
            right_cell(
                &format_number(entry.count, options.number_format),
                if lead { leader_color } else { None },
                lead,
            ),
        ]);
    }

    let total: u64 = entries.iter().map(|e| e.count).sum();
    format!(
        "\n  Pledge Leaderboard\n\n{table}\n\n  {} across {}\n",
        counted(total, "pledge", options.number_format),
        counted(entries.len() as u64, "action", options.number_format)
    )
}

fn counted(n: u64, noun: &str, number_format: NumberFormat) -> String {
    let plural = if n > 1 { "s" } else { "" };
    format!("{} {noun}{plural}", format_number(n, number_format))
}

/// One `action — n pledge(s)` line per entry
pub(crate) fn render_leaderboard_lines(
    entries: &[LeaderboardEntry],
    limit: Option<usize>,
) -> String {
    if entries.is_empty() {
        return EMPTY_LEADERBOARD.to_string();
    }
    visible(entries, limit)
        .iter()
        .map(LeaderboardEntry::label)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn output_leaderboard_json(
    entries: &[LeaderboardEntry],
    limit: Option<usize>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(visible(entries, limit))
}
