use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stk", about = concat!("stk v", env!("CARGO_PKG_VERSION"), " - stacks of things, top first"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the stack data (overrides config)
    #[arg(short = 'd', long = "store-dir", global = true)]
    pub store_dir: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stacks, or create/remove one
    Stacks(StacksCmd),
    /// Show the entries of a stack, top first
    Show(ShowArgs),
    /// Push an item onto a stack (asks before adding unknown items)
    Add(AddArgs),
    /// Remove the entry at an index (0 = top)
    Rm(RmArgs),
    /// Remove every entry of a stack
    Clear(ClearArgs),
    /// Show autocomplete candidates for a query
    Search(SearchArgs),
    /// List the items you have added that are not in the catalog
    Suggestions,
    /// Simulate a horizontal swipe over a row
    Swipe(SwipeArgs),
}

// ---------------------------------------------------------------------------
// Stack index args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct StacksCmd {
    #[command(subcommand)]
    pub action: Option<StacksAction>,
}

#[derive(Subcommand)]
pub enum StacksAction {
    /// Create a new, empty stack
    Add {
        /// Stack name
        name: String,
    },
    /// Delete a stack and all its entries
    Rm {
        /// Stack id or name
        stack: String,
    },
}

// ---------------------------------------------------------------------------
// Stack args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ShowArgs {
    /// Stack id or name
    pub stack: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Stack id or name
    pub stack: String,
    /// Item to push
    pub item: String,
    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct RmArgs {
    /// Stack id or name
    pub stack: String,
    /// Index of the entry to remove (0 = top)
    pub index: usize,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Stack id or name
    pub stack: String,
    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to match against the start of catalog items and suggestions
    pub query: String,
}

#[derive(Args)]
pub struct SwipeArgs {
    /// Stack id or name
    pub stack: String,
    /// Index of the row to swipe (0 = top)
    pub index: usize,
    /// Horizontal travel in columns (negative = left)
    #[arg(long, allow_hyphen_values = true)]
    pub dx: f32,
    /// Row width in columns (default: swipe.row_width from config)
    #[arg(long)]
    pub width: Option<f32>,
}
