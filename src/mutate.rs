//! User-driven selection changes
//!
//! Each mutation resolves to a single [`SelectionUpdate`] that replaces both
//! halves of the pair at once.

use crate::catalog::Catalog;
use crate::selection::{ChangeCause, SelectionUpdate};
use tracing::debug;

/// A user interaction that changes the selection
pub trait Mutation {
    /// Reported to listeners once the update is applied
    const CAUSE: ChangeCause;

    /// Resolve this interaction against the current catalog
    fn resolve(&self, catalog: &Catalog) -> SelectionUpdate;
}

/// The user picked a provider from the provider options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseProvider {
    /// Chosen provider name
    pub name: String,
}

impl ChooseProvider {
    /// Create the mutation
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Mutation for ChooseProvider {
    const CAUSE: ChangeCause = ChangeCause::ProviderChosen;

    /// Switch to the provider and to its first model.
    ///
    /// An unknown provider name does not switch the provider. When the
    /// provider has no models the current model is kept, even though it
    /// belongs to the previous provider.
    fn resolve(&self, catalog: &Catalog) -> SelectionUpdate {
        let provider = catalog.provider(&self.name).map(|p| p.name.clone());
        if provider.is_none() {
            debug!(provider = %self.name, "Chosen provider is not enabled");
        }

        let model = catalog.first_model_for(&self.name).map(|m| m.name.clone());
        if model.is_none() {
            debug!(provider = %self.name, "Chosen provider has no models, keeping model");
        }

        SelectionUpdate { provider, model }
    }
}

/// The user picked a model from the filtered model options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseModel {
    /// Chosen model name
    pub name: String,
}

impl ChooseModel {
    /// Create the mutation
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Mutation for ChooseModel {
    const CAUSE: ChangeCause = ChangeCause::ModelChosen;

    // Options are pre-filtered by provider, so no membership check here.
    fn resolve(&self, _catalog: &Catalog) -> SelectionUpdate {
        SelectionUpdate::model(self.name.clone())
    }
}
