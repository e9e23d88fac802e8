use clap::Parser;
use flowtab::core::bar::NavigationBar;
use flowtab::core::config::{self, CliOverrides};
use flowtab::core::demo::DemoItems;
use flowtab::core::theme::StylePreset;
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flowtab", about = "Configurable bottom navigation bar demo")]
struct Args {
    /// Style preset for the bar
    #[arg(short, long, value_enum)]
    style: Option<StylePreset>,

    /// Built-in item set (ignored when the config file lists [[items]])
    #[arg(short, long, value_enum)]
    items: Option<DemoItems>,

    /// Log level for flowtab.log (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Read config from this file instead of ~/.flowtab/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the theme, items and initial visual state as JSON and exit
    #[arg(long)]
    dump_state: bool,
}

#[derive(Serialize)]
struct StateDump<'a> {
    style: StylePreset,
    theme: &'a flowtab::core::theme::ThemeConfig,
    items: &'a [flowtab::core::item::NavItem],
    state: flowtab::core::bar::VisualState,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let log_level = args.log_level.as_deref().and_then(|s| match s.parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            eprintln!("flowtab: ignoring unknown log level {s:?}");
            None
        }
    });
    let cli = CliOverrides {
        style: args.style,
        items: args.items,
        log_level,
    };

    let loaded = match args.config.as_deref() {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    // Problems are reported after the logger is up, since it needs the level.
    let (resolved, config_errors) =
        config::resolve_or_default(loaded, &cli, |name| std::env::var(name).ok())
            .map_err(std::io::Error::other)?;
    for e in &config_errors {
        eprintln!("flowtab: {e}; using defaults");
    }

    // Initialize file logger - writes to flowtab.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flowtab.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    for e in &config_errors {
        log::warn!("Config error, using defaults: {}", e);
    }

    log::info!(
        "FlowTab starting up with style {:?}, {} items",
        resolved.style,
        resolved.items.len()
    );

    if args.dump_state {
        let bar = NavigationBar::new(
            resolved.items.clone(),
            resolved.style.config(),
            resolved.options.clone(),
        )
        .map_err(std::io::Error::other)?;
        let dump = StateDump {
            style: resolved.style,
            theme: bar.theme(),
            items: bar.items().as_slice(),
            state: bar.current_visual_state(),
        };
        let json = serde_json::to_string_pretty(&dump).map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    flowtab::tui::run(resolved)
}
