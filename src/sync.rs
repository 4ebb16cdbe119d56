//! Selection synchronizer: keeps the selected provider inside the catalog
//!
//! This is a level-triggered repair rule. It is re-checked whenever the
//! provider list, the model list or the selected provider changes, and it
//! only acts when the selected provider is no longer enabled.

use crate::catalog::Catalog;
use crate::selection::{Selection, SelectionUpdate};
use tracing::debug;

/// Compute the repair for `selection` against `catalog`, if one is needed
///
/// - Empty provider list: nothing to fall back to, returns `None`.
/// - Selected provider missing (or nothing selected): switch to the first
///   provider and, if that provider has a model, to its first model. When it
///   has none the model half is left untouched.
/// - Selected provider still enabled: returns `None`.
#[must_use]
pub fn reconcile(catalog: &Catalog, selection: &Selection) -> Option<SelectionUpdate> {
    let fallback = catalog.first_provider()?;

    if selection
        .provider_name()
        .is_some_and(|name| catalog.contains_provider(name))
    {
        return None;
    }

    let model = catalog
        .first_model_for(&fallback.name)
        .map(|m| m.name.clone());

    debug!(
        from = ?selection.provider,
        to = %fallback.name,
        model = ?model,
        "Selected provider is not enabled, falling back"
    );

    Some(SelectionUpdate::provider(fallback.name.clone()).with_model(model))
}

/// The inputs the synchronizer depends on
///
/// Lists are tracked by revision number rather than by content: every push
/// from the catalog source bumps the matching revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Revision of the provider list
    pub providers: u64,
    /// Revision of the model list
    pub models: u64,
    /// Selected provider name
    pub provider: Option<String>,
}

/// Runs [`reconcile`] at most once per distinct [`Snapshot`]
#[derive(Debug, Default)]
pub struct Synchronizer {
    last: Option<Snapshot>,
}

impl Synchronizer {
    /// Create a synchronizer that has not seen any input yet
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Check `snapshot`, returning the repair to apply
    ///
    /// Returns `None` without evaluating anything when `snapshot` was already
    /// checked.
    pub fn check(
        &mut self,
        snapshot: Snapshot,
        catalog: &Catalog,
        selection: &Selection,
    ) -> Option<SelectionUpdate> {
        if self.last.as_ref() == Some(&snapshot) {
            return None;
        }
        self.last = Some(snapshot);
        reconcile(catalog, selection)
    }

    /// Record `snapshot` as reconciled without evaluating it
    ///
    /// Used after a repair has been applied: the repaired selection is valid
    /// by construction.
    pub fn settle(&mut self, snapshot: Snapshot) {
        self.last = Some(snapshot);
    }
}
