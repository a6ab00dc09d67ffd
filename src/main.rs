//! calnav - Entry Point

use calnav::model::date::parse_date;
use calnav::model::View;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// calnav - keyboard-driven terminal date picker
#[derive(Parser, Debug)]
#[command(name = "calnav")]
#[command(version)]
#[command(about = "Pick a date by drilling through month, year, decade and century views")]
pub struct Args {
    /// Earliest selectable date (YYYY-MM-DD)
    #[arg(long)]
    pub min: Option<NaiveDate>,

    /// Latest selectable date (YYYY-MM-DD)
    #[arg(long)]
    pub max: Option<NaiveDate>,

    /// Comma-separated view levels, finest first (month,year,decade,century)
    #[arg(long, value_delimiter = ',')]
    pub views: Option<Vec<View>>,

    /// Initial view
    #[arg(long)]
    pub view: Option<View>,

    /// Initially focused date (YYYY-MM-DD); invalid dates are ignored
    #[arg(long)]
    pub date: Option<String>,

    /// Initially selected date (YYYY-MM-DD); invalid dates are ignored
    #[arg(long)]
    pub value: Option<String>,

    /// Right-to-left mode: mirror the horizontal arrow keys
    #[arg(long)]
    pub rtl: bool,

    /// Hide the "today" footer
    #[arg(long)]
    pub no_footer: bool,

    /// Print the selection as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> calnav::config::CliOverrides {
        calnav::config::CliOverrides {
            min: self.min,
            max: self.max,
            views: self.views.clone(),
            view: self.view,
            rtl: self.rtl.then_some(true),
            footer: self.no_footer.then_some(false),
            color: self.no_color.then_some(false),
        }
    }
}

/// Printed on exit with `--json`.
#[derive(Debug, Serialize)]
struct Selection {
    value: NaiveDate,
    view: View,
}

/// Lenient date flag: an unparsable date is dropped with a warning.
fn date_flag(name: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        warn!(flag = name, value = raw, "Ignoring invalid date");
    }
    parsed
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = calnav::config::load_config_with_precedence(args.config.clone())?;
        let merged = calnav::config::merge_config(config_file);
        let with_env = calnav::config::apply_env_overrides(merged);
        calnav::config::apply_cli_overrides(with_env, args.overrides())
    };

    calnav::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let initial_date = date_flag("--date", args.date.as_deref());
    let initial_value = date_flag("--value", args.value.as_deref());
    let calendar_config = config.calendar_config(initial_date, initial_value);

    let options = calnav::view::PickerOptions {
        footer: config.footer,
        color: calnav::view::ColorConfig::from_env_and_args(!config.color),
    };

    let state = calnav::view::run_with_options(&calendar_config, options)?;

    if let Some(value) = state.value {
        info!(%value, "Exiting with selection");
        if args.json {
            let selection = Selection {
                value,
                view: state.view,
            };
            println!("{}", serde_json::to_string(&selection)?);
        } else {
            println!("{}", value);
        }
    }

    Ok(())
}
