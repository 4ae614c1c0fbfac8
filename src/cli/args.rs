use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "outfitmatch")]
#[command(author = "MrMattias")]
#[command(version)]
#[command(about = "Color-harmony outfit matcher for the clothes you own")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Wardrobe file (defaults to the configured path)
    #[arg(short, long, global = true)]
    pub(crate) wardrobe: Option<PathBuf>,

    /// Search a read-only JSON wardrobe snapshot instead of the wardrobe file
    #[arg(short, long, global = true, conflicts_with = "wardrobe")]
    pub(crate) snapshot: Option<PathBuf>,

    /// Log search details to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

/// Options shared by every search command
#[derive(Args, Clone, Copy)]
pub(crate) struct OutputArgs {
    /// Maximum number of results (defaults to the configured limit)
    #[arg(short = 'n', long)]
    pub(crate) limit: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Best outfits from everything in the wardrobe
    Suggest {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Outfits built around one piece, filled in from the wardrobe
    Match {
        /// Category of the piece (top, pants, shoes, jacket)
        category: String,
        /// Color as #rrggbb, r,g,b or a CSS name
        color: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Outfits for a piece you are thinking of buying
    Consider {
        /// Category of the piece (top, pants, shoes, jacket)
        category: String,
        /// Color as #rrggbb, r,g,b or a CSS name
        color: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Combinations across a chosen set of categories
    Combos {
        /// Two or more categories, e.g. `top shoes`
        #[arg(required = true)]
        categories: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Name the closest CSS color
    Name {
        /// Color as #rrggbb or r,g,b
        color: String,
    },
    /// Manage wardrobe items
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },
    /// Manage saved outfits
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ItemAction {
    /// List all items
    List,
    /// Add an item by color or from a photo
    Add {
        /// Category (top, pants, shoes, jacket)
        category: String,
        /// Color as #rrggbb, r,g,b or a CSS name
        #[arg(short, long, required_unless_present = "image", conflicts_with = "image")]
        color: Option<String>,
        /// Photo to take the dominant color from
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Remove an item (and any saved outfit wearing it)
    Remove {
        /// Item id
        id: u64,
    },
}

#[derive(Subcommand)]
pub(crate) enum SavedAction {
    /// List saved outfits
    List,
    /// Save an outfit from item ids
    Add {
        #[arg(long)]
        top: u64,
        #[arg(long)]
        pants: u64,
        #[arg(long)]
        shoes: u64,
        #[arg(long)]
        jacket: Option<u64>,
    },
    /// Remove a saved outfit
    Remove {
        /// Saved outfit id
        id: u64,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
