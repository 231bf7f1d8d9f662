use crate::export::ExportFormat;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for grocery-co2
#[derive(Parser)]
#[command(
    name = "grocery-co2",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse the Big Climate Database, total the CO2e of a grocery basket and track basket trends over time",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read the reference table from a saved HTML page instead of the web
    #[arg(global = true, long = "source", value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// More diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// About the climate database and its limitations
    About,

    /// Browse the reference dataset
    Dataset {
        #[arg(
            long = "category",
            short = 'c',
            value_name = "CATEGORY",
            help = "Only show these categories (repeatable)"
        )]
        categories: Vec<String>,

        #[arg(long, help = "Average CO2e per kg of every category")]
        means: bool,

        #[arg(
            long,
            value_name = "N",
            num_args = 0..=1,
            help = "The N most polluting products (default from config)"
        )]
        top: Option<Option<usize>>,

        #[arg(long, requires = "top", help = "With --top: the least polluting instead")]
        least: bool,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Total the emissions of a grocery basket
    Basket {
        #[arg(
            long = "add",
            short = 'a',
            value_name = "FOOD",
            help = "Product to put in the basket (repeatable)"
        )]
        add: Vec<String>,

        #[arg(
            long = "category",
            short = 'c',
            help = "Only match products of this category"
        )]
        category: Option<String>,
    },

    /// Emission trends of a purchase history
    Trends {
        #[command(subcommand)]
        action: TrendsAction,
    },
}

#[derive(Subcommand)]
pub enum TrendsAction {
    /// Generate a random purchase history from the database
    Generate {
        #[arg(long, value_name = "YYYY-MM-DD", default_value = "today")]
        start: String,

        #[arg(long, value_name = "YYYY-MM-DD", default_value = "today")]
        end: String,

        #[arg(long, default_value_t = 1, help = "Number of baskets (one per distinct day)")]
        baskets: usize,

        #[arg(long = "max-items", default_value_t = 1, help = "Maximum items per basket")]
        max_items: usize,

        #[arg(long, help = "Seed for a reproducible history")]
        seed: Option<u64>,

        #[command(flatten)]
        dashboard: DashboardArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Load a purchase history from a CSV file
    Upload {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        dashboard: DashboardArgs,
    },
}

#[derive(Args, Clone)]
pub struct DashboardArgs {
    #[arg(long, value_enum, default_value = "basket", help = "Basket summary or every purchase")]
    pub view: View,

    #[arg(long = "top-products", value_name = "N", help = "Products in the top list")]
    pub top_products: Option<usize>,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    #[arg(long, value_name = "FILE", help = "Also write the rows to FILE")]
    pub out: Option<String>,

    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    #[arg(long, short = 'f', requires = "out", help = "Overwrite FILE without asking")]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Basket,
    All,
}
