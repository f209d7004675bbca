//! # CLI Layer
//!
//! This module is **one possible UI client** for PILAR. It is the only place
//! that knows about terminal I/O: it parses arguments, initializes the
//! context, dispatches to [`PilarApi`](pilarapp::api::PilarApi) and prints the
//! rendered result. Errors bubble up to `main`, which sets the exit code.

use super::logging;
use super::render::{self, View};
use super::setup::{Cli, Commands};
use anyhow::{bail, Result};
use clap::Parser;
use pilarapp::commands::history::HistoryFilter;
use pilarapp::config::validate_classify_url;
use pilarapp::http_client::HttpClassifier;
use pilarapp::init::{initialize, PilarContext};
use pilarapp::store::ScanHistory;
use std::time::Duration;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = initialize(cli.data.clone())?;
    debug!(data_dir = %ctx.api.paths().data_dir.display(), "context ready");
    let json = cli.json;

    // Naked invocation lists the history.
    let command = cli.command.unwrap_or(Commands::History {
        category: None,
        limit: None,
    });

    let (result, view) = dispatch(ctx, command)?;
    let output = if json {
        render::render_json(&result)?
    } else {
        render::render(&result, view)
    };
    print!("{}", output);
    Ok(())
}

fn dispatch(
    ctx: PilarContext,
    command: Commands,
) -> Result<(pilarapp::commands::CmdResult, View)> {
    let PilarContext {
        api,
        classifier,
        config,
    } = ctx;

    let outcome = match command {
        Commands::Scan { image, url, token } => {
            let classifier = match url {
                Some(url) => {
                    validate_classify_url(&url)?;
                    let fresh = HttpClassifier::new(url, Duration::from_secs(config.timeout_secs));
                    match config.auth_token {
                        Some(t) => fresh.with_auth_token(t),
                        None => fresh,
                    }
                }
                None => classifier,
            };
            let classifier = match token {
                Some(t) => classifier.with_auth_token(t),
                None => classifier,
            };
            debug!(endpoint = classifier.endpoint(), "scanning {}", image.display());
            (api.scan_image(&classifier, &image)?, View::Detail)
        }
        Commands::History { category, limit } => {
            let filter = HistoryFilter {
                bucket: category.map(Into::into),
                limit,
            };
            (api.list_scans(&filter)?, View::List)
        }
        Commands::Show { id } => (api.view_scan(&id)?, View::Detail),
        Commands::Delete { ids } => (api.delete_scans(&ids)?, View::Messages),
        Commands::Clear { yes } => {
            let count = api.store().count();
            if !yes && count > 0 {
                bail!(
                    "Refusing to delete {} scan{} without --yes",
                    count,
                    if count == 1 { "" } else { "s" }
                );
            }
            (api.clear_history()?, View::Messages)
        }
        Commands::Stats => (api.stats()?, View::Stats),
    };
    Ok(outcome)
}
