//! Change notifications consumed by the selector

use crate::catalog::{Catalog, Model, ModelLoading, Provider};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selector events
///
/// Catalog events come from the catalog source and the loading signal; the
/// `*Chosen` events come from user interaction with the rendered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The enabled provider list was replaced
    ProvidersChanged {
        /// New provider list
        providers: Vec<Provider>,
    },
    /// The model catalog was replaced
    ModelsChanged {
        /// New model list
        models: Vec<Model>,
    },
    /// Both lists were replaced at once
    CatalogChanged {
        /// New catalog
        catalog: Catalog,
    },
    /// The loading indicator changed
    LoadingChanged {
        /// New loading state
        #[serde(default)]
        loading: ModelLoading,
    },
    /// The user picked a provider
    ProviderChosen {
        /// Chosen provider name
        name: String,
    },
    /// The user picked a model
    ModelChosen {
        /// Chosen model name
        name: String,
    },
}

impl Event {
    /// Tag used for this event in scripts
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ProvidersChanged { .. } => "providers_changed",
            Self::ModelsChanged { .. } => "models_changed",
            Self::CatalogChanged { .. } => "catalog_changed",
            Self::LoadingChanged { .. } => "loading_changed",
            Self::ProviderChosen { .. } => "provider_chosen",
            Self::ModelChosen { .. } => "model_chosen",
        }
    }
}

/// Parse a JSON-lines event script
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns the 1-based line number of the first line that is not a valid
/// event.
pub fn parse_script(path: &Path, contents: &str) -> Result<Vec<Event>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| Error::ParseEvent {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Read and parse a JSON-lines event script
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid event.
pub fn load_script(path: &Path) -> Result<Vec<Event>> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_script() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let script = r#"
# initial catalog
{"event": "providers_changed", "providers": [{"name": "A"}]}
{"event": "models_changed", "models": [{"name": "a1", "label": "A One", "provider": "A"}]}

{"event": "loading_changed", "loading": "all"}
{"event": "loading_changed"}
{"event": "provider_chosen", "name": "A"}
{"event": "model_chosen", "name": "a1"}
"#;
        let events = parse_script(Path::new("script.jsonl"), script)?;
        assert_eq!(
            events,
            vec![
                Event::ProvidersChanged {
                    providers: vec![Provider::new("A")],
                },
                Event::ModelsChanged {
                    models: vec![Model::new("a1", "A One", "A")],
                },
                Event::LoadingChanged {
                    loading: ModelLoading::All,
                },
                Event::LoadingChanged {
                    loading: ModelLoading::Idle,
                },
                Event::ProviderChosen {
                    name: "A".to_string(),
                },
                Event::ModelChosen {
                    name: "a1".to_string(),
                },
            ]
        );
        Ok(())
    }

    #[test]
    #[expect(clippy::panic, reason = "test assertions")]
    fn test_parse_script_reports_line() {
        let script = "{\"event\": \"model_chosen\", \"name\": \"m\"}\n\n{\"event\": \"bogus\"}\n";
        match parse_script(Path::new("s.jsonl"), script) {
            Err(Error::ParseEvent { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_script_missing_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp_dir = tempfile::TempDir::new()?;
        let result = load_script(&temp_dir.path().join("none.jsonl"));
        assert!(matches!(result, Err(Error::Read { .. })));
        Ok(())
    }

    #[test]
    fn test_name_matches_serde_tag() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let event = Event::CatalogChanged {
            catalog: Catalog::default(),
        };
        let json = serde_json::to_value(&event)?;
        assert_eq!(json["event"], event.name());
        Ok(())
    }
}
