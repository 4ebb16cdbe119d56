//! model-selector - provider and model selection kept consistent
//!
//! Lets a user pick a provider and one of its models from two dependent
//! lists while the set of enabled providers and the model catalog change
//! underneath. The selection itself is owned by the caller; this crate
//! computes repairs, user-driven updates and the option view.

pub mod catalog;
pub mod config;
pub mod error;
pub mod mutate;
pub mod options;
pub mod paths;
pub mod selection;
pub mod selector;
pub mod sync;

pub use catalog::{Catalog, Model, ModelLoading, Provider};
pub use config::Config;
pub use error::Error;
pub use options::SelectorView;
pub use selection::{ChangeCause, Selection, SelectionOwner, SelectionUpdate};
pub use selector::{Event, ModelSelector, SelectionChange, SubscriptionId};
pub use sync::reconcile;
