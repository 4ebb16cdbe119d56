//! The reactive selector unit
//!
//! [`ModelSelector`] holds the latest committed catalog and loading state,
//! reads and writes the selection through a caller-supplied
//! [`SelectionOwner`], and re-runs the synchronizer after every committed
//! change. Listeners can subscribe to applied selection changes.

mod event;

pub use event::{Event, load_script, parse_script};

use crate::catalog::{Catalog, Model, ModelLoading, Provider};
use crate::config::Config;
use crate::mutate::{ChooseModel, ChooseProvider, Mutation};
use crate::options::{self, SelectorView};
use crate::selection::{ChangeCause, Selection, SelectionOwner, SelectionUpdate};
use crate::sync::{Snapshot, Synchronizer};
use std::fmt;
use tracing::debug;

/// Handle returned by [`ModelSelector::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An applied selection change, as seen by listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// What triggered the change
    pub cause: ChangeCause,
    /// The update that was applied
    pub update: SelectionUpdate,
    /// The selection after the update
    pub selection: Selection,
}

type Listener = Box<dyn FnMut(&SelectionChange)>;

/// Provider/model selector bound to a selection owner
pub struct ModelSelector<O: SelectionOwner> {
    owner: O,
    catalog: Catalog,
    loading: ModelLoading,
    providers_revision: u64,
    models_revision: u64,
    synchronizer: Synchronizer,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<O: SelectionOwner> ModelSelector<O> {
    /// Mount a selector and run the synchronizer once
    #[must_use]
    pub fn new(owner: O, catalog: Catalog, loading: ModelLoading) -> Self {
        let mut selector = Self {
            owner,
            catalog,
            loading,
            providers_revision: 0,
            models_revision: 0,
            synchronizer: Synchronizer::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        };
        selector.sync();
        selector
    }

    /// The selection owner
    #[must_use]
    pub const fn owner(&self) -> &O {
        &self.owner
    }

    /// Unmount, handing the owner back
    #[must_use]
    pub fn into_owner(self) -> O {
        self.owner
    }

    /// Current selection
    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.owner.selection()
    }

    /// Latest committed catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Latest committed loading state
    #[must_use]
    pub const fn loading(&self) -> &ModelLoading {
        &self.loading
    }

    /// Replace the provider list
    pub fn set_providers(&mut self, providers: Vec<Provider>) {
        self.catalog.providers = providers;
        self.providers_revision += 1;
        self.sync();
    }

    /// Replace the model list
    pub fn set_models(&mut self, models: Vec<Model>) {
        self.catalog.models = models;
        self.models_revision += 1;
        self.sync();
    }

    /// Replace both lists, reconciling once against the combined result
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.providers_revision += 1;
        self.models_revision += 1;
        self.sync();
    }

    /// Replace the loading indicator
    ///
    /// Loading state only affects the view, so no reconciliation runs.
    pub fn set_loading(&mut self, loading: ModelLoading) {
        self.loading = loading;
    }

    /// Modify the selection from outside, then reconcile
    pub fn with_owner_mut<R>(&mut self, f: impl FnOnce(&mut O) -> R) -> R {
        let result = f(&mut self.owner);
        self.sync();
        result
    }

    /// The user picked a provider
    pub fn choose_provider(&mut self, name: &str) {
        self.apply_mutation(&ChooseProvider::new(name));
    }

    /// The user picked a model
    pub fn choose_model(&mut self, name: &str) {
        self.apply_mutation(&ChooseModel::new(name));
    }

    /// Dispatch an event
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::ProvidersChanged { providers } => self.set_providers(providers),
            Event::ModelsChanged { models } => self.set_models(models),
            Event::CatalogChanged { catalog } => self.set_catalog(catalog),
            Event::LoadingChanged { loading } => self.set_loading(loading),
            Event::ProviderChosen { name } => self.choose_provider(&name),
            Event::ModelChosen { name } => self.choose_model(&name),
        }
    }

    /// Register a listener for applied selection changes
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&SelectionChange) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Options for the renderer
    #[must_use]
    pub fn view(&self, config: &Config) -> SelectorView {
        options::view(&self.catalog, self.owner.selection(), &self.loading, config)
    }

    /// Re-check the selection against the committed inputs
    ///
    /// Does nothing when the inputs have not changed since the last check.
    pub fn sync(&mut self) {
        let snapshot = self.snapshot();
        let Some(update) = self
            .synchronizer
            .check(snapshot, &self.catalog, self.owner.selection())
        else {
            return;
        };

        self.commit(ChangeCause::Repair, update);
        let repaired = self.snapshot();
        self.synchronizer.settle(repaired);
    }

    fn apply_mutation<M: Mutation + fmt::Debug>(&mut self, mutation: &M) {
        let update = mutation.resolve(&self.catalog);
        if update.is_empty() {
            debug!(?mutation, "Mutation changes nothing");
            return;
        }
        self.commit(M::CAUSE, update);
        self.sync();
    }

    // Both halves go to the owner in one call; nothing observes the pair in
    // between.
    fn commit(&mut self, cause: ChangeCause, update: SelectionUpdate) {
        debug!(
            ?cause,
            provider = ?update.provider,
            model = ?update.model,
            "Applying selection update"
        );
        self.owner.set_selection(&update);

        if self.listeners.is_empty() {
            return;
        }
        let change = SelectionChange {
            cause,
            update,
            selection: self.owner.selection().clone(),
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            providers: self.providers_revision,
            models: self.models_revision,
            provider: self.owner.selection().provider.clone(),
        }
    }
}

impl<O: SelectionOwner + fmt::Debug> fmt::Debug for ModelSelector<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSelector")
            .field("owner", &self.owner)
            .field("catalog", &self.catalog)
            .field("loading", &self.loading)
            .field("providers_revision", &self.providers_revision)
            .field("models_revision", &self.models_revision)
            .field("synchronizer", &self.synchronizer)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
