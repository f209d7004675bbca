use clap::{Parser, Subcommand, ValueEnum};
use pilarapp::model::CategoryBucket;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pilar", bin_name = "pilar", version)]
#[command(about = "Scan waste items, keep a history, see your sorting stats", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: $PILAR_DATA or the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an image and save the result to history
    #[command(display_order = 1)]
    Scan {
        /// Image file to classify
        image: PathBuf,

        /// Classification endpoint (overrides classify_url)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Bearer token (overrides auth_token)
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },

    /// List scan history, newest first
    #[command(alias = "ls", display_order = 2)]
    History {
        /// Only show one category
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Show at most N scans
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show one scan with its tips
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Scan id
        id: String,
    },

    /// Delete scans by id
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Scan ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete the whole history
    #[command(display_order = 5)]
    Clear {
        /// Skip the safety check
        #[arg(short, long)]
        yes: bool,
    },

    /// Show organic / inorganic counts
    #[command(display_order = 6)]
    Stats,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Organic,
    Inorganic,
    Hazardous,
    Other,
}

impl From<CategoryArg> for CategoryBucket {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Organic => CategoryBucket::Organic,
            CategoryArg::Inorganic => CategoryBucket::Inorganic,
            CategoryArg::Hazardous => CategoryBucket::Hazardous,
            CategoryArg::Other => CategoryBucket::Other,
        }
    }
}
