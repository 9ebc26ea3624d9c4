mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use whatson_core::catalog::Catalog;
use whatson_core::config::WhatsonConfig;
use whatson_core::favorites::FavoriteStore;
use whatson_core::filter::{DateBucket, FilterSelection};

#[derive(Parser)]
#[command(name = "whatson")]
#[command(about = "Browse the event feed, star events and export them to your calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming events
    List {
        /// Only events starting this month
        #[arg(long, conflicts_with_all = ["next_month", "starred"])]
        month: bool,

        /// Only events starting next month
        #[arg(long, conflicts_with = "starred")]
        next_month: bool,

        /// Only starred events (city/category filters do not apply)
        #[arg(long)]
        starred: bool,

        /// Only events in this city
        #[arg(short, long)]
        city: Option<String>,

        /// Only events with this exact category
        #[arg(short = 'k', long)]
        category: Option<String>,
    },
    /// Show one event in detail
    Show {
        /// Event id (as shown by `list`)
        id: String,
    },
    /// Toggle an event's star
    Star {
        /// Event id; picked interactively when omitted
        id: Option<String>,
    },
    /// Re-fetch the feed from the remote endpoint
    Refresh,
    /// Write an event to a .ics file for your calendar app
    Export {
        /// Event id
        id: String,

        /// Output path (defaults to <id>.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Open an event's agenda page in the browser
    Open {
        /// Event id
        id: String,
    },
    /// List the cities present in the feed
    Cities,
    /// List the categories present in the feed
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            month,
            next_month,
            starred,
            city,
            category,
        } => {
            let (catalog, store) = load_app()?;
            let selection = FilterSelection {
                bucket: bucket_from_flags(month, next_month, starred),
                city,
                category,
            };
            commands::list::run(&catalog, &store, selection).await
        }
        Commands::Show { id } => {
            let (catalog, store) = load_app()?;
            commands::show::run(&catalog, &store, &id).await
        }
        Commands::Star { id } => {
            let (catalog, store) = load_app()?;
            commands::star::run(&catalog, &store, id.as_deref()).await
        }
        Commands::Refresh => {
            let (catalog, _) = load_app()?;
            commands::refresh::run(&catalog).await
        }
        Commands::Export { id, output } => {
            let (catalog, _) = load_app()?;
            commands::export::run(&catalog, &id, output).await
        }
        Commands::Open { id } => {
            let (catalog, _) = load_app()?;
            commands::open::run(&catalog, &id).await
        }
        Commands::Cities => {
            let (catalog, _) = load_app()?;
            commands::cities::run(&catalog).await
        }
        Commands::Categories => {
            let (catalog, _) = load_app()?;
            commands::categories::run(&catalog).await
        }
    }
}

fn bucket_from_flags(month: bool, next_month: bool, starred: bool) -> DateBucket {
    if starred {
        DateBucket::Starred
    } else if month {
        DateBucket::ThisMonth
    } else if next_month {
        DateBucket::NextMonth
    } else {
        DateBucket::All
    }
}

fn load_app() -> Result<(Catalog, FavoriteStore)> {
    let config = WhatsonConfig::load()?;

    let source = match config.feed_source() {
        Ok(source) => source,
        Err(e) => {
            let path = WhatsonConfig::config_path()?;
            anyhow::bail!(
                "{e}\n\n\
                Point whatson at your feed by editing:\n  {}",
                path.display()
            );
        }
    };

    let data_dir = config.data_dir()?;
    let catalog = Catalog::new(source, &data_dir);
    let store = FavoriteStore::load(config.favorites_path()?);

    Ok((catalog, store))
}
