//! Option view handed to renderers
//!
//! Everything a renderer needs to draw the two dropdowns, computed from the
//! catalog, the current selection and the loading indicator. Styling and
//! markup stay with the renderer.

use crate::catalog::{Catalog, ModelLoading};
use crate::config::Config;
use crate::selection::Selection;
use serde::Serialize;
use std::fmt;

/// One entry of the provider dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderOption {
    /// Stable key and value: the provider name
    pub name: String,
}

/// One entry of the model dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    /// Position within the rendered list
    pub key: usize,
    /// Model name submitted when chosen; empty for the loading placeholder
    pub value: String,
    /// Display text
    pub label: String,
}

/// State of the model dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelControl {
    /// Remount key: the control is rebuilt whenever the provider changes
    pub key: Option<String>,
    /// Currently selected model
    pub value: Option<String>,
    /// Options in display order
    pub options: Vec<ModelOption>,
    /// Whether the control accepts input
    pub disabled: bool,
}

/// What a renderer should draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectorView {
    /// No provider is enabled; show the message instead of the dropdowns
    NoProviders {
        /// Informational text
        message: String,
    },
    /// Both dropdowns are shown
    Ready {
        /// Provider options, in catalog order
        providers: Vec<ProviderOption>,
        /// Currently selected provider
        selected_provider: Option<String>,
        /// Model dropdown
        models: ModelControl,
    },
}

/// Provider options: the provider list in order, once each
#[must_use]
pub fn provider_options(catalog: &Catalog) -> Vec<ProviderOption> {
    catalog
        .providers
        .iter()
        .map(|p| ProviderOption {
            name: p.name.clone(),
        })
        .collect()
}

/// Model options for `provider`, in catalog order
#[must_use]
pub fn model_options(catalog: &Catalog, provider: Option<&str>) -> Vec<ModelOption> {
    let Some(provider) = provider else {
        return Vec::new();
    };
    catalog
        .models_for(provider)
        .enumerate()
        .map(|(key, m)| ModelOption {
            key,
            value: m.name.clone(),
            label: m.label.clone(),
        })
        .collect()
}

/// Model dropdown state, including the loading placeholder
#[must_use]
pub fn model_control(
    catalog: &Catalog,
    selection: &Selection,
    loading: &ModelLoading,
    loading_label: &str,
) -> ModelControl {
    let provider = selection.provider_name();
    let (options, disabled) = if loading.blocks(provider) {
        let placeholder = ModelOption {
            key: 0,
            value: String::new(),
            label: loading_label.to_string(),
        };
        (vec![placeholder], true)
    } else {
        (model_options(catalog, provider), false)
    };

    ModelControl {
        key: selection.provider.clone(),
        value: selection.model.clone(),
        options,
        disabled,
    }
}

/// Build the full view
#[must_use]
pub fn view(
    catalog: &Catalog,
    selection: &Selection,
    loading: &ModelLoading,
    config: &Config,
) -> SelectorView {
    if !catalog.has_providers() {
        return SelectorView::NoProviders {
            message: config.no_providers_message.clone(),
        };
    }

    SelectorView::Ready {
        providers: provider_options(catalog),
        selected_provider: selection.provider.clone(),
        models: model_control(catalog, selection, loading, &config.loading_label),
    }
}

impl fmt::Display for SelectorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProviders { message } => writeln!(f, "{message}"),
            Self::Ready {
                providers,
                selected_provider,
                models,
            } => {
                writeln!(f, "Providers:")?;
                for option in providers {
                    let check = if selected_provider.as_deref() == Some(option.name.as_str()) {
                        "✓ "
                    } else {
                        "  "
                    };
                    writeln!(f, "  {check}{}", option.name)?;
                }

                let state = if models.disabled { " (disabled)" } else { "" };
                writeln!(f, "Models{state}:")?;
                if models.options.is_empty() {
                    writeln!(f, "  (none)")?;
                }
                for option in &models.options {
                    let check = if !models.disabled
                        && models.value.as_deref() == Some(option.value.as_str())
                    {
                        "✓ "
                    } else {
                        "  "
                    };
                    writeln!(f, "  {check}{}", option.label)?;
                }
                Ok(())
            }
        }
    }
}
