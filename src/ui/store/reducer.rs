//! Reducer for the client state store.

use crate::ui::mvi::Reducer;

use super::intent::StoreIntent;
use super::state::AppState;

/// Applies store intents. Each arm touches exactly one concern, except
/// `ResetState` which clears the per-submission flags together.
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = AppState;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::ResetState => {
                state.review_entry = false;
                state.user_query_in_db = false;
                state.search_beer_id.clear();
                state.show_search_form = false;
            }
            StoreIntent::SetSearchFormVisible => state.show_search_form = true,
            StoreIntent::ToggleUserLoggedIn => state.user_logged_in = !state.user_logged_in,
            StoreIntent::SetCurrentUserId { id } => state.current_user_id = id,
            StoreIntent::SetBeerData { beer } => state.beer_data = beer,
            StoreIntent::MarkQueryFound => state.user_query_in_db = true,
            StoreIntent::SetSearchBeerId { id } => state.search_beer_id = id,
            StoreIntent::ToggleReviewEntry => state.review_entry = !state.review_entry,
            StoreIntent::ClearReviewEntry => state.review_entry = false,
        }
        state
    }
}
