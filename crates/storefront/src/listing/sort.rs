//! Sort choices derived from attribute metadata.

use serde::{Deserialize, Serialize};

use crate::catalog::types::{GqlSortInput, SortDirection, SortMetadata};

use super::translation::Translation;

/// A user-facing sort choice; `value` is the wire attribute code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub label: String,
    pub value: String,
}

/// Static sort choices shown before attribute metadata arrives.
#[must_use]
pub fn default_sort_options() -> Vec<SortOption> {
    vec![
        SortOption {
            label: "Most Relevant".to_string(),
            value: "relevance".to_string(),
        },
        SortOption {
            label: "Price: Low to High".to_string(),
            value: "price".to_string(),
        },
        SortOption {
            label: "Price: High to Low".to_string(),
            value: "price".to_string(),
        },
    ]
}

/// Derive the sort dropdown choices from server metadata.
///
/// Seeds with `position` in category browse, `relevance` otherwise, then
/// appends one choice per metadata entry in input order. Skipped entries:
/// attributes containing `relevance` or `position` (already seeded), and
/// `inStock` while out-of-stock products are hidden.
#[must_use]
pub fn sort_options_from_metadata(
    translation: &Translation,
    sort_metadata: &[SortMetadata],
    display_out_of_stock: &str,
    category_path: &str,
) -> Vec<SortOption> {
    let mut sort_options = if category_path.is_empty() {
        vec![SortOption {
            label: translation.sort_dropdown.relevance_label.clone(),
            value: "relevance".to_string(),
        }]
    } else {
        vec![SortOption {
            label: translation.sort_dropdown.position_label.clone(),
            value: "position".to_string(),
        }]
    };

    // The flag is a raw config string; only the literal "1" shows
    // out-of-stock products
    let display_in_stock_only = display_out_of_stock != "1";

    for entry in sort_metadata {
        if entry.attribute.contains("relevance")
            || (entry.attribute.contains("inStock") && display_in_stock_only)
            || entry.attribute.contains("position")
        {
            continue;
        }

        let label = translation
            .sort_dropdown
            .custom_labels
            .get(&entry.label)
            .cloned()
            .unwrap_or_else(|| entry.label.clone());

        sort_options.push(SortOption {
            label,
            value: entry.attribute.clone(),
        });
    }

    sort_options
}

/// Build the wire sort directive for a selected option.
///
/// An empty option means the server's default ordering (relevance or
/// position), signalled by `None` rather than an empty directive.
#[must_use]
pub fn gql_sort_input(
    sort_option: &str,
    sort_direction: Option<SortDirection>,
) -> Option<Vec<GqlSortInput>> {
    if sort_option.is_empty() {
        return None;
    }

    Some(vec![GqlSortInput {
        attribute: sort_option.to_string(),
        direction: sort_direction.unwrap_or_default(),
    }])
}
