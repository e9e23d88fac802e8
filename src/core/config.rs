//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flowtab/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::badge::Badge;
use crate::core::bar::BarOptions;
use crate::core::demo::DemoItems;
use crate::core::error::NavError;
use crate::core::item::{ItemList, ItemVariant, NavItem};
use crate::core::theme::StylePreset;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlowtabConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub style: Option<StylePreset>,
    pub items: Option<DemoItems>,
    pub default_item: Option<String>,
    pub clear_query_on_exit: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemEntry {
    pub id: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub selected_icon: Option<String>,
    pub kind: Option<ItemVariant>,
    pub badge_count: Option<u32>,
    pub badge_dot: Option<bool>,
}

impl ItemEntry {
    fn to_item(&self) -> Result<NavItem, NavError> {
        let badge = Badge::from_parts(self.badge_count, self.badge_dot.unwrap_or(false))?;
        let label = self.label.clone().unwrap_or_else(|| self.id.clone());
        let icon = self.icon.clone().unwrap_or_else(|| "•".to_string());
        let mut item = NavItem::new(&self.id, label, icon)
            .with_variant(self.kind.unwrap_or_default())
            .with_badge(badge);
        item.selected_icon = self.selected_icon.clone();
        Ok(item)
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub style: StylePreset,
    pub items: ItemList,
    pub options: BarOptions,
    pub log_level: LevelFilter,
}

/// Values from CLI flags. `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub style: Option<StylePreset>,
    pub items: Option<DemoItems>,
    pub log_level: Option<LevelFilter>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(NavError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(e) => write!(f, "config rejected: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<NavError> for ConfigError {
    fn from(e: NavError) -> Self {
        ConfigError::Invalid(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.flowtab/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flowtab").join("config.toml"))
}

/// Load config from `~/.flowtab/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlowtabConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FlowtabConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(FlowtabConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FlowtabConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FlowtabConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FlowtabConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# FlowTab Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# style = "modern-pill"        # "modern-pill", "modern-pill-compact", "instagram", "floating-minimal"
# items = "with-search"        # "with-search", "plain", "with-action"
# default_item = "home"        # selected at startup and on unknown routes
# clear_query_on_exit = false  # clear the search query when search collapses
# log_level = "debug"          # "off", "error", "warn", "info", "debug", "trace"

# An explicit item list replaces the built-in set chosen by `items`.
# [[items]]
# id = "home"
# label = "Home"
# icon = "⌂"
# kind = "standard"            # "standard", "search", "isolated"

# [[items]]
# id = "favorites"
# label = "Favorites"
# icon = "♡"
# selected_icon = "♥"
# badge_count = 5              # 1..=99; cannot be combined with badge_dot

# [[items]]
# id = "add"
# label = "Add"
# icon = "+"
# kind = "isolated"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FlowtabConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process.
pub fn resolve_with(
    config: &FlowtabConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Style: CLI → env → config → default
    let style = cli
        .style
        .or_else(|| env_value(&env, "FLOWTAB_STYLE"))
        .or(config.general.style)
        .unwrap_or_default();

    // Items: explicit [[items]] win over any built-in set
    let items = if config.items.is_empty() {
        cli.items
            .or_else(|| env_value(&env, "FLOWTAB_ITEMS"))
            .or(config.general.items)
            .unwrap_or_default()
            .build()?
    } else {
        let entries = config
            .items
            .iter()
            .map(ItemEntry::to_item)
            .collect::<Result<Vec<_>, _>>()?;
        ItemList::new(entries)?
    };

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| env("FLOWTAB_LOG").and_then(|s| s.parse().ok()))
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let options = BarOptions {
        default_id: config.general.default_item.clone(),
        clear_query_on_exit: config.general.clear_query_on_exit.unwrap_or(false),
    };

    if let Some(ref id) = options.default_id
        && !items.contains(id)
    {
        return Err(NavError::InvalidConfig(format!("default_item '{id}' is not in the item list")).into());
    }

    Ok(ResolvedConfig {
        style,
        items,
        options,
        log_level,
    })
}

/// Resolve a loaded config, falling back to defaults for a file that failed
/// to load or to resolve. The problems hit along the way are returned so the
/// caller can report them once logging is set up.
pub fn resolve_or_default(
    loaded: Result<FlowtabConfig, ConfigError>,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(ResolvedConfig, Vec<ConfigError>), ConfigError> {
    let mut problems = Vec::new();
    let file_config = loaded.unwrap_or_else(|e| {
        problems.push(e);
        FlowtabConfig::default()
    });
    match resolve_with(&file_config, cli, &env) {
        Ok(resolved) => Ok((resolved, problems)),
        Err(e) => {
            problems.push(e);
            let resolved = resolve_with(&FlowtabConfig::default(), cli, &env)?;
            Ok((resolved, problems))
        }
    }
}

/// Parse an env var with the same spelling as the CLI flag values.
fn env_value<T: ValueEnum>(env: impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = env(name)?;
    match T::from_str(&raw, true) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = FlowtabConfig::default();
        assert!(config.items.is_empty());
        assert!(config.general.style.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&FlowtabConfig::default(), &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.items.len(), 4);
        assert!(resolved.items.contains("search"));
        assert_eq!(resolved.options, BarOptions::default());
    }

    #[test]
    fn test_resolve_cli_style_wins() {
        let config = FlowtabConfig {
            general: GeneralConfig {
                style: Some(StylePreset::Instagram),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            style: Some(StylePreset::FloatingMinimal),
            ..Default::default()
        };
        assert_eq!(resolve_with(&config, &cli, no_env).unwrap().style, StylePreset::FloatingMinimal);
    }

    #[test]
    fn test_resolve_cli_items_and_log_level() {
        let cli = CliOverrides {
            items: Some(DemoItems::WithAction),
            log_level: Some(LevelFilter::Warn),
            ..Default::default()
        };
        let resolved = resolve_with(&FlowtabConfig::default(), &cli, no_env).unwrap();
        assert!(resolved.items.contains("add"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_toml_item_list() {
        let toml_str = r#"
[general]
style = "instagram"
default_item = "feed"
clear_query_on_exit = true
log_level = "info"

[[items]]
id = "feed"
label = "Feed"
icon = "≡"

[[items]]
id = "find"
kind = "search"

[[items]]
id = "inbox"
badge_count = 12

[[items]]
id = "new"
kind = "isolated"
badge_dot = true
"#;
        let config: FlowtabConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.items.len(), 4);
        let resolved = resolve_with(&config, &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.options.default_id.as_deref(), Some("feed"));
        assert!(resolved.options.clear_query_on_exit);
        assert_eq!(resolved.items.get("find").unwrap().variant, ItemVariant::Search);
        assert_eq!(resolved.items.get("find").unwrap().label, "find");
        assert_eq!(resolved.items.get("inbox").unwrap().badge, Some(Badge::Count(12)));
        assert_eq!(resolved.items.get("new").unwrap().badge, Some(Badge::Dot));
    }

    #[test]
    fn test_env_sits_between_cli_and_file() {
        let config = FlowtabConfig {
            general: GeneralConfig {
                style: Some(StylePreset::Instagram),
                log_level: Some("info".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |name: &str| match name {
            "FLOWTAB_STYLE" => Some("floating-minimal".to_string()),
            "FLOWTAB_ITEMS" => Some("with-action".to_string()),
            "FLOWTAB_LOG" => Some("warn".to_string()),
            _ => None,
        };
        let resolved = resolve_with(&config, &CliOverrides::default(), env).unwrap();
        assert_eq!(resolved.style, StylePreset::FloatingMinimal);
        assert!(resolved.items.contains("add"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);

        let cli = CliOverrides {
            style: Some(StylePreset::ModernPill),
            ..Default::default()
        };
        assert_eq!(resolve_with(&config, &cli, env).unwrap().style, StylePreset::ModernPill);
    }

    #[test]
    fn test_bad_env_value_is_ignored() {
        let env = |name: &str| (name == "FLOWTAB_STYLE").then(|| "neon".to_string());
        let resolved = resolve_with(&FlowtabConfig::default(), &CliOverrides::default(), env).unwrap();
        assert_eq!(resolved.style, StylePreset::default());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: FlowtabConfig = toml::from_str("[general]\nstyle = \"modern-pill-compact\"\n").unwrap();
        assert_eq!(config.general.style, Some(StylePreset::ModernPillCompact));
        assert!(config.general.default_item.is_none());
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_invalid_badge_rejected() {
        let toml_str = r#"
[[items]]
id = "inbox"
badge_count = 3
badge_dot = true
"#;
        let config: FlowtabConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            resolve_with(&config, &CliOverrides::default(), no_env),
            Err(ConfigError::Invalid(NavError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_unknown_default_item_rejected() {
        let config = FlowtabConfig {
            general: GeneralConfig {
                default_item: Some("settings".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(resolve_with(&config, &CliOverrides::default(), no_env).is_err());
    }

    #[test]
    fn test_duplicate_item_ids_rejected() {
        let toml_str = "[[items]]\nid = \"a\"\n\n[[items]]\nid = \"a\"\n";
        let config: FlowtabConfig = toml::from_str(toml_str).unwrap();
        assert!(resolve_with(&config, &CliOverrides::default(), no_env).is_err());
    }

    #[test]
    fn test_resolve_or_default_collects_problems() {
        let path = std::env::temp_dir().join("flowtab-does-not-exist.toml");
        let (resolved, problems) =
            resolve_or_default(load_config_from(&path), &CliOverrides::default(), no_env).unwrap();
        assert_eq!(resolved.style, StylePreset::default());
        assert!(matches!(problems.as_slice(), [ConfigError::Io(_)]));

        let config: FlowtabConfig = toml::from_str("[[items]]\nid = \"a\"\n\n[[items]]\nid = \"a\"\n").unwrap();
        let (resolved, problems) =
            resolve_or_default(Ok(config), &CliOverrides::default(), no_env).unwrap();
        assert!(resolved.items.contains("home"));
        assert!(matches!(problems.as_slice(), [ConfigError::Invalid(_)]));

        let (_, problems) =
            resolve_or_default(Ok(FlowtabConfig::default()), &CliOverrides::default(), no_env).unwrap();
        assert!(problems.is_empty());
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let path = std::env::temp_dir().join("flowtab-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
