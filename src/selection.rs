//! The caller-owned `(provider, model)` selection pair
//!
//! The selector never stores a selection of its own. It reads the pair from a
//! [`SelectionOwner`] and writes back whole [`SelectionUpdate`]s, so both
//! halves of a change land in one call.

use serde::{Deserialize, Serialize};

/// Currently selected provider and model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected provider name
    #[serde(default)]
    pub provider: Option<String>,

    /// Selected model name
    #[serde(default)]
    pub model: Option<String>,
}

impl Selection {
    /// Create a selection
    #[must_use]
    pub const fn new(provider: Option<String>, model: Option<String>) -> Self {
        Self { provider, model }
    }

    /// Selected provider name, if any
    #[must_use]
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Selected model name, if any
    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Apply both halves of `update` in place
    pub fn apply(&mut self, update: &SelectionUpdate) {
        if let Some(provider) = &update.provider {
            self.provider = Some(provider.clone());
        }
        if let Some(model) = &update.model {
            self.model = Some(model.clone());
        }
    }
}

/// One transactional change to the selection pair
///
/// A `None` half leaves that part of the selection unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionUpdate {
    /// New provider, if it changes
    pub provider: Option<String>,

    /// New model, if it changes
    pub model: Option<String>,
}

impl SelectionUpdate {
    /// Update that switches the provider only
    #[must_use]
    pub fn provider(name: impl Into<String>) -> Self {
        Self {
            provider: Some(name.into()),
            model: None,
        }
    }

    /// Update that switches the model only
    #[must_use]
    pub fn model(name: impl Into<String>) -> Self {
        Self {
            provider: None,
            model: Some(name.into()),
        }
    }

    /// Also switch the model, when one is given
    #[must_use]
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Whether applying this update would change nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.provider.is_none() && self.model.is_none()
    }
}

/// Why the selection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCause {
    /// The synchronizer repaired a provider that left the catalog
    Repair,
    /// The user picked a provider
    ProviderChosen,
    /// The user picked a model
    ModelChosen,
}

/// Owner of the selection state
///
/// `set_selection` receives both halves at once; implementations must make
/// them visible together.
pub trait SelectionOwner {
    /// Current selection
    fn selection(&self) -> &Selection;

    /// Apply one transactional update
    fn set_selection(&mut self, update: &SelectionUpdate);
}

impl SelectionOwner for Selection {
    fn selection(&self) -> &Selection {
        self
    }

    fn set_selection(&mut self, update: &SelectionUpdate) {
        self.apply(update);
    }
}

impl<T: SelectionOwner + ?Sized> SelectionOwner for &mut T {
    fn selection(&self) -> &Selection {
        (**self).selection()
    }

    fn set_selection(&mut self, update: &SelectionUpdate) {
        (**self).set_selection(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_both_halves() {
        let mut selection = Selection::new(Some("openai".into()), Some("gpt-4o".into()));
        selection.apply(&SelectionUpdate::provider("anthropic").with_model(Some("haiku".into())));
        assert_eq!(selection.provider_name(), Some("anthropic"));
        assert_eq!(selection.model_name(), Some("haiku"));
    }

    #[test]
    fn test_apply_keeps_missing_half() {
        let mut selection = Selection::new(Some("openai".into()), Some("gpt-4o".into()));
        selection.apply(&SelectionUpdate::provider("anthropic"));
        assert_eq!(selection.provider_name(), Some("anthropic"));
        assert_eq!(selection.model_name(), Some("gpt-4o"));

        selection.apply(&SelectionUpdate::model("o1"));
        assert_eq!(selection.provider_name(), Some("anthropic"));
        assert_eq!(selection.model_name(), Some("o1"));
    }

    #[test]
    fn test_empty_update() {
        assert!(SelectionUpdate::default().is_empty());
        assert!(!SelectionUpdate::model("m").is_empty());
        assert!(SelectionUpdate::default().with_model(None).is_empty());
    }

    #[test]
    fn test_owner_through_mut_ref() {
        fn choose<O: SelectionOwner>(mut owner: O) -> Option<String> {
            owner.set_selection(&SelectionUpdate::provider("p1"));
            owner.selection().provider.clone()
        }

        let mut selection = Selection::default();
        assert_eq!(choose(&mut selection).as_deref(), Some("p1"));
        assert_eq!(selection.provider_name(), Some("p1"));
    }

    #[test]
    fn test_change_cause_serializes_snake_case() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            serde_json::to_string(&ChangeCause::ProviderChosen)?,
            r#""provider_chosen""#
        );
        Ok(())
    }
}
