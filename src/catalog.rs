//! Provider and model catalog types
//!
//! The catalog is pushed by an external source and only ever read here.
//! List order is meaningful: it is the display order and the tie-break when a
//! fallback provider or model has to be picked.

use crate::error::{self, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An upstream source of models
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provider {
    /// Unique provider identifier
    pub name: String,
}

impl Provider {
    /// Create a provider with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A model offered by exactly one provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Model {
    /// Identifier, unique within its provider
    pub name: String,

    /// Display text
    #[serde(default)]
    pub label: String,

    /// Name of the owning provider
    pub provider: String,
}

impl Model {
    /// Create a model
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            provider: provider.into(),
        }
    }

    /// Whether this model belongs to `provider`
    #[must_use]
    pub fn is_offered_by(&self, provider: &str) -> bool {
        self.provider == provider
    }
}

/// The provider list and the global model list, as last pushed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Enabled providers, in priority order
    #[serde(default)]
    pub providers: Vec<Provider>,

    /// Models across all providers, in display order
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Catalog {
    /// Create a catalog from already-resolved lists
    #[must_use]
    pub const fn new(providers: Vec<Provider>, models: Vec<Model>) -> Self {
        Self { providers, models }
    }

    /// Load a catalog snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn from_path(path: &Path) -> error::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether at least one provider is enabled
    #[must_use]
    pub const fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    /// The highest-priority provider
    #[must_use]
    pub fn first_provider(&self) -> Option<&Provider> {
        self.providers.first()
    }

    /// Look up a provider by name
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Whether `name` is in the current provider list
    #[must_use]
    pub fn contains_provider(&self, name: &str) -> bool {
        self.provider(name).is_some()
    }

    /// First model (in list order) belonging to `provider`
    #[must_use]
    pub fn first_model_for(&self, provider: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.is_offered_by(provider))
    }

    /// Selectable models of `provider`: its models with a non-empty name, in
    /// list order
    pub fn models_for<'a>(&'a self, provider: &'a str) -> impl Iterator<Item = &'a Model> + 'a {
        self.models
            .iter()
            .filter(move |m| m.is_offered_by(provider) && !m.name.is_empty())
    }
}

/// Which model lists are still being fetched
///
/// On the wire this is an opaque token: empty or absent means idle, `"all"`
/// means every provider, anything else names one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ModelLoading {
    /// Nothing is loading
    #[default]
    Idle,
    /// The models of every provider are loading
    All,
    /// The models of one provider are loading
    Provider(String),
}

impl ModelLoading {
    /// Token meaning "every provider"
    pub const ALL_TOKEN: &'static str = "all";

    /// Parse the opaque loading token
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "" => Self::Idle,
            Self::ALL_TOKEN => Self::All,
            other => Self::Provider(other.to_string()),
        }
    }

    /// The opaque token for this state
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::All => Self::ALL_TOKEN,
            Self::Provider(name) => name,
        }
    }

    /// Whether the model list of `provider` is not yet available
    #[must_use]
    pub fn blocks(&self, provider: Option<&str>) -> bool {
        match self {
            Self::Idle => false,
            Self::All => true,
            Self::Provider(name) => provider == Some(name.as_str()),
        }
    }
}

impl From<Option<String>> for ModelLoading {
    fn from(token: Option<String>) -> Self {
        token.as_deref().map_or(Self::Idle, Self::from_token)
    }
}

impl From<ModelLoading> for String {
    fn from(loading: ModelLoading) -> Self {
        loading.as_token().to_string()
    }
}
