use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::apply_theme_override;
use super::paths::resolve_theme_config_path;
use super::types::Theme;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Build a theme from `theme.conf` content layered over the default palette.
///
/// Inputs:
/// - `content`: `key = color` lines
///
/// Output:
/// - The resulting theme and one diagnostic per rejected line.
#[must_use]
pub fn theme_from_str(content: &str) -> (Theme, Vec<String>) {
    let mut theme = Theme::default();
    let mut errors = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            errors.push(format!("- Missing '=' on line {}", idx + 1));
            continue;
        };
        if let Err(e) = apply_theme_override(&mut theme, &key, &val) {
            errors.push(format!("- {e} on line {}", idx + 1));
        }
    }
    (theme, errors)
}

fn load_theme_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (theme, errors) = theme_from_str(&content);
            for e in &errors {
                tracing::warn!(path = %path.display(), "theme: {e}");
            }
            tracing::info!(path = %path.display(), "loaded theme configuration");
            theme
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read theme; using default palette"
            );
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading `theme.conf` on first use.
///
/// Missing keys keep the default (Catppuccin Mocha) colors.
#[must_use]
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_file(&p))
    })
}
