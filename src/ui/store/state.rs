//! State for the client store.

use crate::api::Beer;
use crate::ui::mvi::UiState;

/// Session flags plus the last-fetched beer.
///
/// Fields are only writable by [`StoreReducer`](super::StoreReducer); the
/// rest of the crate reads through accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(super) beer_data: Option<Beer>,
    pub(super) user_logged_in: bool,
    pub(super) user_query_in_db: bool,
    pub(super) review_entry: bool,
    pub(super) search_beer_id: String,
    pub(super) current_user_id: String,
    pub(super) show_search_form: bool,
}

impl UiState for AppState {}

impl AppState {
    pub fn beer_data(&self) -> Option<&Beer> {
        self.beer_data.as_ref()
    }

    /// Name of the held beer, if there is one and it has a name.
    pub fn beer_name(&self) -> Option<&str> {
        self.beer_data.as_ref().and_then(|beer| beer.name.as_deref())
    }

    pub fn user_logged_in(&self) -> bool {
        self.user_logged_in
    }

    /// True iff the last search matched a beer.
    pub fn user_query_in_db(&self) -> bool {
        self.user_query_in_db
    }

    pub fn review_entry(&self) -> bool {
        self.review_entry
    }

    /// Id of the last located beer, empty when the last search missed.
    pub fn search_beer_id(&self) -> &str {
        &self.search_beer_id
    }

    pub fn current_user_id(&self) -> &str {
        &self.current_user_id
    }

    pub fn show_search_form(&self) -> bool {
        self.show_search_form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_cleared() {
        let state = AppState::default();
        assert!(state.beer_data().is_none());
        assert!(!state.user_logged_in());
        assert!(!state.user_query_in_db());
        assert!(!state.review_entry());
        assert!(state.search_beer_id().is_empty());
        assert!(state.current_user_id().is_empty());
        assert!(!state.show_search_form());
    }

    #[test]
    fn beer_name_requires_a_named_beer() {
        let mut state = AppState::default();
        assert_eq!(state.beer_name(), None);

        state.beer_data = Some(Beer::default());
        assert_eq!(state.beer_name(), None);

        state.beer_data = Some(Beer {
            name: Some("Lager77".to_string()),
            ..Beer::default()
        });
        assert_eq!(state.beer_name(), Some("Lager77"));
    }
}
