//! Theme preference commands.

use std::io::Write;

use sebastian_clothes_core::Theme;
use serde::Serialize;

use super::{OutputFormat, write_json};
use crate::error::Result;
use crate::preferences::PreferenceStore;

/// What to do with the stored theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Get,
    Set(Theme),
    Toggle,
}

#[derive(Serialize)]
struct ThemeOutput {
    theme: Theme,
}

/// Read or change the persisted theme and print the resulting value.
///
/// # Errors
///
/// Returns an error if the preference file cannot be read or written.
pub fn run(
    store: &PreferenceStore,
    action: ThemeAction,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    tracing::debug!(path = %store.path().display(), ?action, "theme command");
    let theme = match action {
        ThemeAction::Get => store.theme()?,
        ThemeAction::Set(theme) => {
            store.set_theme(theme)?;
            theme
        }
        ThemeAction::Toggle => {
            let theme = store.theme()?.toggled();
            store.set_theme(theme)?;
            theme
        }
    };

    match format {
        OutputFormat::Json => write_json(out, &ThemeOutput { theme }),
        OutputFormat::Text => {
            writeln!(out, "{theme}")?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store(name: &str) -> PreferenceStore {
        let path = std::env::temp_dir().join(format!(
            "sc-cli-theme-{}-{name}/prefs.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        PreferenceStore::new(path)
    }

    fn run_text(store: &PreferenceStore, action: ThemeAction) -> String {
        let mut out = Vec::new();
        run(store, action, OutputFormat::Text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_get_set_toggle() {
        let store = store("cycle");
        assert_eq!(run_text(&store, ThemeAction::Get), "light\n");
        assert_eq!(run_text(&store, ThemeAction::Set(Theme::Dark)), "dark\n");
        assert_eq!(run_text(&store, ThemeAction::Get), "dark\n");
        assert_eq!(run_text(&store, ThemeAction::Toggle), "light\n");
        assert_eq!(store.theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_json_output() {
        let store = store("json");
        let mut out = Vec::new();
        run(&store, ThemeAction::Set(Theme::Dark), OutputFormat::Json, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["theme"], "dark");
    }
}
