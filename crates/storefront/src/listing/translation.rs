//! User-facing strings for the listing widget.
//!
//! The shipped table is the French storefront copy. Custom sort labels are
//! keyed by the raw label the backend reports for an attribute.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Translation table for the listing surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub sort_dropdown: SortDropdownLabels,
    pub category_filters: CategoryFiltersLabels,
    pub add_to_cart: AddToCartLabels,
    pub out_of_stock: OutOfStockLabels,
    pub loading: LoadingLabels,
}

/// Labels for the sort dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortDropdownLabels {
    /// Label for the `relevance` seed option.
    pub relevance_label: String,
    /// Label for the `position` seed option in category browse.
    pub position_label: String,
    /// Overrides keyed by the backend's own attribute label.
    #[serde(default)]
    pub custom_labels: HashMap<String, String>,
}

/// Templates for result counts and titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFiltersLabels {
    /// Results count template with a `{totalCount}` placeholder.
    pub products: String,
    /// Search results title template with a `{phrase}` placeholder.
    pub results: String,
}

/// Add-to-cart button copy per lifecycle stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartLabels {
    pub idle: String,
    pub adding: String,
    pub added: String,
}

impl AddToCartLabels {
    /// Button copy for the current stage.
    #[must_use]
    pub fn for_status(&self, status: AddToCartStatus) -> &str {
        match status {
            AddToCartStatus::Idle => &self.idle,
            AddToCartStatus::Adding => &self.adding,
            AddToCartStatus::RecentlyAdded => &self.added,
        }
    }
}

/// Lifecycle of the add-to-cart control.
///
/// `RecentlyAdded` holds briefly after a successful add before the control
/// returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddToCartStatus {
    #[default]
    Idle,
    Adding,
    RecentlyAdded,
}

/// Out-of-stock banner copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutOfStockLabels {
    pub out_of_stock: String,
    pub notify_me: String,
}

/// Loading indicator copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingLabels {
    pub title: String,
}

impl Default for Translation {
    fn default() -> Self {
        Self {
            sort_dropdown: SortDropdownLabels {
                relevance_label: "Pertinence".to_string(),
                position_label: "Position".to_string(),
                custom_labels: HashMap::from([
                    ("Price".to_string(), "Prix".to_string()),
                    ("Name".to_string(), "Nom".to_string()),
                ]),
            },
            category_filters: CategoryFiltersLabels {
                products: "{totalCount} produits".to_string(),
                results: "Résultats pour {phrase}".to_string(),
            },
            add_to_cart: AddToCartLabels {
                idle: "Ajouter Au Panier".to_string(),
                adding: "En cours d'ajout".to_string(),
                added: "Ajouté".to_string(),
            },
            out_of_stock: OutOfStockLabels {
                out_of_stock: "En rupture de stock".to_string(),
                notify_me: "Prévenez-moi".to_string(),
            },
            loading: LoadingLabels {
                title: "Chargement en cours...".to_string(),
            },
        }
    }
}
