// SPDX-License-Identifier: MIT
//
// contrastkit — check a palette's color pairings for WCAG contrast.
//
// This is the binary that wires the crates together:
//
//   ck-color    → Color parsing, sRGB → XYZ → Lab
//   ck-contrast → relative luminance, contrast ratio, rating
//   ck-names    → nearest named color / design-system swatch (CIEDE2000)
//   ck-palette  → pairings, palette drafts, the saved-palette record file
//
// Startup order:
//
//   argv → clap → config file → logger → store → command → stdout
//
// The logger comes after the config so the config's log_level can apply;
// a config that fails to load is reported once the logger exists.

mod cli;
mod commands;
mod config;

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use ck_palette::PaletteStore;
use env_logger::{Builder, Env};
use log::{debug, warn};

use crate::cli::Args;
use crate::commands::{Output, Session};
use crate::config::Config;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_err) = match Config::locate(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logger(args.log_level.as_deref().or(config.log_level.as_deref()));
    if let Some(e) = config_err {
        warn!("{e:#}; using default settings");
    }

    let store = PaletteStore::open(args.store.clone().unwrap_or_else(|| config.store_path()));
    debug!("palette store at {}", store.path().display());

    let stdout = io::stdout();
    let output = Output {
        json: args.json,
        color: !args.json && stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    };
    let session = Session {
        config: &config,
        store,
        output,
    };

    let mut out = stdout.lock();
    commands::run(args.command, &session, &mut out)?;
    out.flush()?;
    Ok(())
}

/// An explicit level (flag or config) wins over `RUST_LOG`.
fn init_logger(level: Option<&str>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.parse_filters(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_LEVEL)),
    };
    builder.format_timestamp(None).init();
}
