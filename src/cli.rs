//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use ck_color::Color;
use ck_names::Table;
use clap::{Parser, Subcommand};

/// Check color pairings for WCAG contrast, name colors, and keep saved palettes.
#[derive(Parser, Debug)]
#[command(name = "contrastkit", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Palette record file (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Contrast ratio and rating of two colors
    Check {
        #[arg(value_name = "A")]
        a: Color,
        #[arg(value_name = "B")]
        b: Color,
    },

    /// Evaluate every background/text pairing of a palette
    Pairs {
        #[arg(value_name = "COLORS", required = true)]
        colors: Vec<Color>,
    },

    /// Nearest reference color name
    Name {
        color: Color,

        /// Reference table: named or design-system (defaults to config)
        #[arg(short, long)]
        table: Option<Table>,
    },

    /// Nearest design-system swatch for each color
    Snap {
        #[arg(value_name = "COLORS", required = true)]
        colors: Vec<Color>,
    },

    /// Save a palette to the record file
    Save {
        name: String,

        #[arg(value_name = "COLORS", required = true)]
        colors: Vec<Color>,

        /// Select every pairing instead of none
        #[arg(long)]
        select_all: bool,

        /// Descriptive theme label
        #[arg(long, value_name = "THEME")]
        theme: Option<String>,
    },

    /// List saved palettes, newest first
    List {
        /// Case-insensitive match on name or theme
        #[arg(short, long)]
        query: Option<String>,

        /// Saved on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<NaiveDate>,

        /// Saved on or before this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<NaiveDate>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show a saved palette with its names and selected pairings
    Show {
        id: String,

        /// Snap every color to the design-system swatches first
        #[arg(long)]
        snap: bool,
    },

    /// Delete a saved palette
    Delete { id: String },

    /// Rename a saved palette
    Rename { id: String, name: String },

    /// Set a saved palette's theme label (omit THEME to clear it)
    Theme { id: String, theme: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("contrastkit").chain(argv.iter().copied()))
    }

    #[test]
    fn definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn check_parses_colors() {
        let args = parse(&["check", "#FFFFFF", "#000000"]).unwrap();
        assert_eq!(
            args.command,
            Command::Check {
                a: Color::WHITE,
                b: Color::BLACK
            }
        );
        assert!(!args.json);
    }

    #[test]
    fn invalid_color_is_rejected_by_name() {
        let err = parse(&["check", "#FFF", "#000000"]).unwrap_err();
        assert!(err.to_string().contains("#FFF"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = parse(&[
            "pairs",
            "#000000",
            "#ffffff",
            "--json",
            "--store",
            "/tmp/p.json",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.store, Some(PathBuf::from("/tmp/p.json")));
    }

    #[test]
    fn name_table_aliases() {
        let args = parse(&["name", "#3b82f6", "--table", "tailwind"]).unwrap();
        assert_eq!(
            args.command,
            Command::Name {
                color: Color::from_u32(0x3b_82_f6),
                table: Some(Table::DesignSystem)
            }
        );
        assert!(parse(&["name", "#3b82f6", "--table", "pantone"]).is_err());
    }

    #[test]
    fn list_dates_and_page() {
        let args = parse(&["list", "--from", "2024-05-01", "--page", "2"]).unwrap();
        let Command::List { from, to, page, query } = args.command else {
            panic!("expected list");
        };
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(to, None);
        assert_eq!(page, 2);
        assert_eq!(query, None);
        assert!(parse(&["list", "--to", "05/01/2024"]).is_err());
    }

    #[test]
    fn pairs_needs_colors() {
        assert!(parse(&["pairs"]).is_err());
    }

    #[test]
    fn theme_without_value_clears() {
        let args = parse(&["theme", "17"]).unwrap();
        assert_eq!(
            args.command,
            Command::Theme {
                id: "17".to_owned(),
                theme: None
            }
        );
    }
}
