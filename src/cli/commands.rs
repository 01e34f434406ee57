//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Record a pledge and show the updated leaderboard
    Pledge {
        /// Your name
        name: String,
        /// The action you commit to (e.g. "Recycle", "Plant trees")
        action: String,
        /// Why you are pledging
        #[arg(short, long)]
        why: Option<String>,
    },
    /// Show actions ranked by pledge count (default)
    Leaderboard {
        /// Show only the top N actions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Plain `action — n pledges` lines instead of a table
        #[arg(long)]
        plain: bool,
    },
    /// Show every stored pledge, oldest first
    History,
    /// Show a green tech tip
    Tip {
        /// Tip number to show, wrapping past the end (defaults to the current rotation)
        #[arg(short, long, conflicts_with = "quote")]
        index: Option<usize>,
        /// Show this quote instead of a tip
        #[arg(short, long)]
        quote: Option<String>,
    },
    /// List all tips
    Tips,
    /// Show details for a technology card
    Topic {
        /// One of smart-solar, ev, ewaste, green-arch
        topic: String,
    },
    /// Print the counter animation frames for a statistic
    Counter {
        /// Value the counter lands on
        target: u64,
    },
}

impl Commands {
    /// Command run when none is given
    pub(crate) fn default_command() -> Self {
        Commands::Leaderboard {
            limit: None,
            plain: false,
        }
    }
}
