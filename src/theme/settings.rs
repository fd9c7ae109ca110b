use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::state::{OrderDirection, SortKey, StatName};
use crate::theme::parsing::strip_inline_comment;
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// What: Parse `settings.conf` content over `settings`.
///
/// Inputs:
/// - `content`: Content of the settings file
/// - `settings`: Mutable reference to `Settings` to populate
///
/// Output:
/// - Diagnostics for values that were rejected (the default is kept for those).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces normalize to `_`.
/// - Unknown keys are ignored silently so older files keep working.
pub fn parse_settings(content: &str, settings: &mut Settings) -> Vec<String> {
    let mut warnings = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(&raw_val);
        let ok = match key.as_str() {
            "endpoint" | "graphql_endpoint" | "api_url" => {
                let accepted = val.starts_with("http://") || val.starts_with("https://");
                if accepted {
                    settings.endpoint = val.to_string();
                }
                accepted
            }
            "page_size" | "limit" => set_parsed(val, &mut settings.page_size, |v| *v > 0),
            "request_timeout_secs" | "timeout_secs" => {
                set_parsed(val, &mut settings.request_timeout_secs, |v| *v > 0)
            }
            "connect_timeout_secs" => {
                set_parsed(val, &mut settings.connect_timeout_secs, |v| *v > 0)
            }
            "description_language_id" | "language_id" => {
                set_parsed(val, &mut settings.description_language_id, |v| *v > 0)
            }
            "moves_limit" => set_parsed(val, &mut settings.moves_limit, |_| true),
            "default_order" | "order" => OrderDirection::from_config_key(val)
                .map(|o| settings.default_order = o)
                .is_some(),
            "default_sort" | "sort" | "sort_by" => SortKey::from_config_key(val)
                .map(|k| settings.default_sort = k)
                .is_some(),
            "default_stat" | "stat" => StatName::from_config_key(val)
                .map(|s| settings.default_stat = s)
                .is_some(),
            _ => true,
        };
        if !ok {
            warnings.push(format!(
                "line {}: invalid value '{val}' for '{raw_key}'",
                idx + 1
            ));
        }
    }
    warnings
}

/// Parse `val` into `slot` when it parses and passes `valid`.
fn set_parsed<T: std::str::FromStr>(val: &str, slot: &mut T, valid: impl Fn(&T) -> bool) -> bool {
    match val.parse::<T>() {
        Ok(v) if valid(&v) => {
            *slot = v;
            true
        }
        _ => false,
    }
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: settings file location
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            for w in parse_settings(&content, &mut out) {
                tracing::warn!(path = %path.display(), "{w}");
            }
            tracing::info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read settings; using defaults"
            );
        }
    }
    out
}

/// What: Return user settings, reading `settings.conf` once per process.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
#[must_use]
pub fn settings() -> Settings {
    SETTINGS
        .get_or_init(|| {
            resolve_settings_config_path().map_or_else(
                || {
                    tracing::debug!("no settings.conf found; using defaults");
                    Settings::default()
                },
                |path| load_settings_from(&path),
            )
        })
        .clone()
}
