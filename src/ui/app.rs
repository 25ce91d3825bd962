use chrono::Utc;

use crate::api::{ApiClient, ApiError, BeerList, NewUser, ReviewPayload, UserRecord};
use crate::config::LoginHash;
use crate::session::{SessionError, SessionStore, StoredSession};
use crate::ui::mvi::Reducer;
use crate::ui::projector::{self, ErrorBanner};
use crate::ui::requests::{
    ApiRequest, ApiResponse, Completion, Dispatch, RequestKind, RequestTracker,
};
use crate::ui::store::{AppState, StoreIntent, StoreReducer};
use crate::ui::view::{Document, RenderPass};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the client state and the document it is projected onto.
///
/// User actions come in through the `submit_*`/`show_*`/`toggle_*` methods,
/// API results through [`App::complete`]. Every visible change goes
/// mutate → project → apply.
pub struct App {
    state: AppState,
    document: Document,
    session: SessionStore,
    credentials: Option<LoginHash>,
    requests: RequestTracker,
    last_pass: Option<RenderPass>,
}

impl App {
    pub fn new(session: SessionStore) -> Self {
        Self {
            state: AppState::default(),
            document: Document::new(),
            session,
            credentials: None,
            requests: RequestTracker::default(),
            last_pass: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The most recent projection applied by [`App::render`].
    pub fn last_pass(&self) -> Option<&RenderPass> {
        self.last_pass.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Pick up a login persisted by an earlier run.
    ///
    /// Returns true when a stored session was found.
    pub fn restore_session(&mut self) -> Result<bool, SessionError> {
        let Some(stored) = self.session.load()? else {
            return Ok(false);
        };

        let username = stored.login_hash.username().unwrap_or_default();
        tracing::info!(user_id = %stored.user_id, "restored stored session");
        self.credentials = Some(stored.login_hash);
        self.dispatch(StoreIntent::SetCurrentUserId { id: stored.user_id });
        if !self.state.user_logged_in() {
            self.dispatch(StoreIntent::ToggleUserLoggedIn);
        }
        self.render();
        self.apply(&projector::render_login_banner(&username));
        Ok(true)
    }

    pub fn show_search_form(&mut self) {
        self.dispatch(StoreIntent::SetSearchFormVisible);
        self.render();
    }

    /// Show or hide the review form. Ignored unless the last search found
    /// a beer.
    pub fn toggle_review_entry(&mut self) {
        if !self.state.user_query_in_db() || self.state.beer_name().is_none() {
            tracing::debug!("review toggle ignored: no beer located");
            return;
        }
        self.dispatch(StoreIntent::ToggleReviewEntry);
        self.render();
    }

    /// Search form submitted.
    pub fn submit_search(&mut self, query: &str) -> Dispatch {
        self.dispatch(StoreIntent::ResetState);
        self.issue_search(query)
    }

    /// Login form submitted.
    pub fn submit_login(&mut self, username: &str, password: &str) -> Dispatch {
        self.dispatch(StoreIntent::ResetState);
        let credentials = LoginHash::from_credentials(username, password);
        self.issue(ApiRequest::Login {
            username: username.to_string(),
            credentials,
        })
    }

    /// Signup form submitted.
    pub fn submit_signup(&mut self, user: NewUser) -> Dispatch {
        self.dispatch(StoreIntent::ResetState);
        let credentials = LoginHash::from_credentials(&user.username, &user.password);
        self.issue(ApiRequest::Signup { user, credentials })
    }

    /// Review form submitted.
    ///
    /// Needs a stored credential and a located beer. Without either a
    /// banner is shown and nothing is sent.
    pub fn submit_review(&mut self, text: &str) -> Option<Dispatch> {
        let Some(credentials) = self.credentials.clone() else {
            self.render();
            self.apply(&projector::render_error_message(ErrorBanner::LoginRequired));
            return None;
        };

        if self.state.search_beer_id().is_empty() {
            tracing::warn!("review submitted without a located beer");
            self.render();
            self.apply(&projector::render_error_message(ErrorBanner::NoBeerSelected));
            return None;
        }

        let payload = ReviewPayload::new(
            self.state.search_beer_id(),
            self.state.current_user_id(),
            text,
            Utc::now(),
        );
        let beer_name = self.state.beer_name().map(str::to_string);
        let search_generation = self.requests.latest(RequestKind::Search);
        Some(self.issue(ApiRequest::SubmitReview {
            credentials,
            payload,
            beer_name,
            search_generation,
        }))
    }

    /// Forget the stored login and bring the auth forms back.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.session.clear()?;
        self.credentials = None;
        if self.state.user_logged_in() {
            self.dispatch(StoreIntent::ToggleUserLoggedIn);
        }
        self.dispatch(StoreIntent::SetCurrentUserId { id: String::new() });
        self.render();
        self.apply(&projector::render_logout());
        tracing::info!("logged out");
        Ok(())
    }

    /// Apply a finished request.
    ///
    /// Stale completions (a newer request of the same kind was issued) are
    /// dropped. May return a follow-up request.
    pub fn complete(&mut self, completion: Completion) -> Option<Dispatch> {
        if !self.requests.is_current(&completion.token) {
            tracing::debug!(
                kind = ?completion.token.kind,
                generation = completion.token.generation,
                "discarding stale completion"
            );
            return None;
        }

        match (completion.request, completion.response) {
            (ApiRequest::Search { query }, ApiResponse::Beers(result)) => {
                self.finish_search(&query, result);
                None
            }
            (
                ApiRequest::Login {
                    username,
                    credentials,
                },
                ApiResponse::User(result),
            ) => {
                self.finish_auth(&username, credentials, result, ErrorBanner::AuthFailed);
                None
            }
            (ApiRequest::Signup { user, credentials }, ApiResponse::User(result)) => {
                self.finish_auth(&user.username, credentials, result, ErrorBanner::UsernameTaken);
                None
            }
            (
                ApiRequest::SubmitReview {
                    beer_name,
                    search_generation,
                    ..
                },
                ApiResponse::Reviewed(result),
            ) => self.finish_review(beer_name, search_generation, result),
            (request, response) => {
                tracing::error!(?request, ?response, "completion does not match its request");
                None
            }
        }
    }

    /// Execute `dispatch` and any follow-ups to completion.
    pub async fn drive(&mut self, api: &ApiClient, dispatch: Dispatch) {
        let mut next = Some(dispatch);
        while let Some(dispatch) = next.take() {
            let completion = dispatch.execute(api).await;
            next = self.complete(completion);
        }
    }

    fn finish_search(&mut self, query: &str, result: Result<BeerList, ApiError>) {
        let list = match result {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(error = %err, kind = err.error_type(), query, "beer search failed");
                return;
            }
        };

        let mut found = false;
        for beer in list
            .beers
            .into_iter()
            .filter(|beer| beer.name.as_deref() == Some(query))
        {
            found = true;
            self.dispatch(StoreIntent::SetSearchBeerId {
                id: beer.id.clone(),
            });
            self.dispatch(StoreIntent::MarkQueryFound);
            self.dispatch(StoreIntent::SetBeerData { beer: Some(beer) });
            self.render();
        }

        if !found {
            tracing::info!(query, "no beer matched");
            self.render();
            self.apply(&projector::render_error_message(ErrorBanner::NotFound));
        }
    }

    fn finish_auth(
        &mut self,
        username: &str,
        credentials: LoginHash,
        result: Result<UserRecord, ApiError>,
        rejected_banner: ErrorBanner,
    ) {
        let user = match result {
            Ok(user) => user,
            Err(err) if err.is_rejected() => {
                tracing::info!(error = %err, username, "authentication rejected");
                self.render();
                self.apply(&projector::render_error_message(rejected_banner));
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.error_type(), "authentication request failed");
                return;
            }
        };

        let stored = StoredSession {
            login_hash: credentials.clone(),
            user_id: user.id.clone(),
        };
        if let Err(err) = self.session.save(&stored) {
            tracing::warn!(error = %err, "could not persist session");
        }

        self.credentials = Some(credentials);
        self.dispatch(StoreIntent::SetCurrentUserId { id: user.id });
        if !self.state.user_logged_in() {
            self.dispatch(StoreIntent::ToggleUserLoggedIn);
        }
        self.render();
        let display_name = if user.username.is_empty() {
            username
        } else {
            &user.username
        };
        self.apply(&projector::render_login_banner(display_name));
        tracing::info!(username = display_name, "logged in");
    }

    fn finish_review(
        &mut self,
        beer_name: Option<String>,
        search_generation: u64,
        result: Result<(), ApiError>,
    ) -> Option<Dispatch> {
        match result {
            Ok(()) => {
                self.dispatch(StoreIntent::ClearReviewEntry);
                self.render();
                // A search started after the review owns the results now.
                if self.requests.latest(RequestKind::Search) != search_generation {
                    tracing::debug!("skipping refetch: newer search in flight");
                    return None;
                }
                let name = beer_name?;
                Some(self.issue_search(&name))
            }
            Err(err) if err.is_rejected() => {
                tracing::info!(error = %err, "review rejected");
                self.render();
                self.apply(&projector::render_error_message(ErrorBanner::LoginRequired));
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = err.error_type(), "review submission failed");
                None
            }
        }
    }

    fn issue_search(&mut self, query: &str) -> Dispatch {
        self.issue(ApiRequest::Search {
            query: query.to_string(),
        })
    }

    fn issue(&mut self, request: ApiRequest) -> Dispatch {
        let token = self.requests.issue(request.kind());
        if token.kind == RequestKind::Search {
            tracing::debug!(generation = token.generation, "search issued");
        }
        Dispatch { token, request }
    }

    fn dispatch(&mut self, intent: StoreIntent) {
        dispatch_mvi!(self, state, StoreReducer, intent);
    }

    /// Project the current state and apply it.
    fn render(&mut self) {
        let pass = projector::render(&self.state);
        self.document.apply(&pass);
        self.last_pass = Some(pass);
    }

    fn apply(&mut self, pass: &RenderPass) {
        self.document.apply(pass);
    }
}
