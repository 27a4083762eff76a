mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use quizsift_core::{telemetry, Category, SiftConfig};

#[derive(Parser)]
#[command(
    name = "quizsift",
    version,
    about = "Filter a question/answer dataset into labeled subsets"
)]
struct Cli {
    /// Optional TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the dataset path.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Override the subset output directory.
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the dataset and print the record count plus a sample record.
    Stats,
    /// Count category membership over the whole dataset, uncapped.
    Estimate,
    /// Write one capped subset of matching records.
    Filter {
        #[arg(value_enum)]
        category: FilterCategory,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterCategory {
    Numbers,
    NonEnglish,
    RareEntities,
}

impl From<FilterCategory> for Category {
    fn from(category: FilterCategory) -> Self {
        match category {
            FilterCategory::Numbers => Category::Number,
            FilterCategory::NonEnglish => Category::Foreign,
            FilterCategory::RareEntities => Category::RareEntity,
        }
    }
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SiftConfig::load(path)?,
        None => SiftConfig::default(),
    };
    if let Some(data) = cli.data {
        config.dataset.data_path = data;
    }
    if let Some(out_dir) = cli.out_dir {
        config.dataset.output_dir = out_dir;
    }

    match cli.command {
        Command::Stats => commands::stats(&config),
        Command::Estimate => commands::estimate(&config),
        Command::Filter { category } => commands::filter(&config, category.into()),
    }
}
