use crate::content::{TIPS, TopicDetail, counter_frames};
use crate::core::Pledge;
use crate::output::format::{NumberFormat, format_number};

/// Confirmation shown after a pledge is recorded
pub(crate) fn pledge_confirmation(pledge: &Pledge) -> String {
    format!(
        "🌿 Thanks, {}! Your pledge to \"{}\" is recorded.",
        pledge.first_name(),
        pledge.action()
    )
}

pub(crate) fn render_tip_list() -> String {
    TIPS.iter()
        .enumerate()
        .map(|(i, tip)| format!("{:>2}. {tip}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_topic(detail: &TopicDetail) -> String {
    let mut out = format!("{}\n\n{}\n", detail.title, detail.body);
    if !detail.points.is_empty() {
        out.push('\n');
        for (label, text) in detail.points {
            out.push_str(&format!("  • {label} {text}\n"));
        }
    }
    out
}

/// Counter frames, one per line
pub(crate) fn render_counter(target: u64, number_format: NumberFormat) -> String {
    counter_frames(target)
        .into_iter()
        .map(|v| format_number(v, number_format))
        .collect::<Vec<_>>()
        .join("\n")
}
