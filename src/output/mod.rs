mod content;
mod format;
mod history;
mod leaderboard;

pub(crate) use content::{pledge_confirmation, render_counter, render_tip_list, render_topic};
pub(crate) use format::NumberFormat;
pub(crate) use history::{HistoryOptions, output_history_json, render_history_table};
pub(crate) use leaderboard::{
    LeaderboardOptions, output_leaderboard_json, render_leaderboard_lines,
    render_leaderboard_table,
};
