//! Listing header view state.
//!
//! Owns the current sort selection, derives the dropdown choices from
//! attribute metadata, and keeps the query string in sync when either the
//! option or the direction changes.

use crate::catalog::types::{GqlSortInput, SortDirection, SortMetadata};
use crate::config::CatalogConfig;

use super::sort::{SortOption, default_sort_options, gql_sort_input, sort_options_from_metadata};
use super::translation::Translation;
use super::url_state::{QueryParams, read_sort, write_sort};

/// View state behind the listing header.
#[derive(Debug, Clone)]
pub struct ListingState {
    translation: Translation,
    display_out_of_stock: String,
    category_path: String,
    sort_options: Vec<SortOption>,
    sort_by: String,
    sort_direction: SortDirection,
}

impl ListingState {
    /// Build the header state for a page load.
    ///
    /// The sort selection hydrates from the query string; without one, a
    /// category page defaults to `position` and a search page to
    /// `relevance`. Dropdown choices start from the static defaults until
    /// [`refresh_sort_options`](Self::refresh_sort_options) runs.
    #[must_use]
    pub fn new(
        translation: Translation,
        config: &CatalogConfig,
        params: &impl QueryParams,
    ) -> Self {
        let category_path = config.category_path().to_string();
        let default_sort = if category_path.is_empty() {
            "relevance"
        } else {
            "position"
        };

        let selection = read_sort(params);

        Self {
            sort_by: selection.order.unwrap_or_else(|| default_sort.to_string()),
            sort_direction: selection.direction,
            sort_options: default_sort_options(),
            display_out_of_stock: config.display_out_of_stock.clone(),
            category_path,
            translation,
        }
    }

    /// Recompute the dropdown choices from fresh attribute metadata.
    pub fn refresh_sort_options(&mut self, metadata: &[SortMetadata]) {
        self.sort_options = sort_options_from_metadata(
            &self.translation,
            metadata,
            &self.display_out_of_stock,
            &self.category_path,
        );
    }

    /// Select a sort attribute.
    ///
    /// Persists the selection and returns the wire directive for the next
    /// search.
    pub fn set_sort_option(
        &mut self,
        value: &str,
        params: &mut impl QueryParams,
    ) -> Option<Vec<GqlSortInput>> {
        self.sort_by = value.to_string();
        write_sort(params, &self.sort_by, self.sort_direction);
        gql_sort_input(&self.sort_by, Some(self.sort_direction))
    }

    /// Change the sort direction.
    ///
    /// Persists the selection and returns the wire directive for the next
    /// search.
    pub fn set_sort_direction(
        &mut self,
        direction: SortDirection,
        params: &mut impl QueryParams,
    ) -> Option<Vec<GqlSortInput>> {
        self.sort_direction = direction;
        write_sort(params, &self.sort_by, direction);
        gql_sort_input(&self.sort_by, Some(direction))
    }

    /// Currently selected sort attribute code.
    #[must_use]
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    /// Currently selected sort direction.
    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Choices for the sort dropdown.
    #[must_use]
    pub fn sort_options(&self) -> &[SortOption] {
        &self.sort_options
    }

    /// Translation table in use.
    #[must_use]
    pub const fn translation(&self) -> &Translation {
        &self.translation
    }

    /// Results count line, e.g. `24 produits`.
    #[must_use]
    pub fn results_label(&self, total_count: u32) -> String {
        self.translation
            .category_filters
            .products
            .replace("{totalCount}", &total_count.to_string())
    }

    /// Listing title: the quoted phrase template for searches, else the
    /// category name.
    #[must_use]
    pub fn title(&self, category_name: Option<&str>, phrase: &str) -> String {
        if phrase.is_empty() {
            category_name.unwrap_or_default().to_string()
        } else {
            self.translation
                .category_filters
                .results
                .replace("{phrase}", &format!("\"{phrase}\""))
        }
    }
}
