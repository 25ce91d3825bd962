use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::models::{BeerList, NewUser, ReviewPayload, UserRecord};
use crate::config::{build_auth_header, LoginHash, ServerConfig};

const BEERS_PATH: &str = "beers";
const USERS_PATH: &str = "users";
const LOGIN_PATH: &str = "users/login";

/// Client for the beer API. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        // Endpoint paths are relative, so a path prefix on the base needs a
        // trailing slash to survive `Url::join`.
        let mut base = server.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
            url: server.base_url.clone(),
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .connect_timeout(server.connect_timeout())
            .timeout(server.timeout())
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: server.base_url.clone(),
                source: e,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            message: e.to_string(),
        })
    }

    /// `GET /beers`. The server does no filtering; callers scan the list.
    pub async fn list_beers(&self) -> Result<BeerList, ApiError> {
        let request = self
            .client
            .get(self.url(BEERS_PATH)?)
            .header(ACCEPT, "application/json");
        let response = send(request, BEERS_PATH).await?;
        let response = expect_success(response, BEERS_PATH).await?;
        decode(response, BEERS_PATH).await
    }

    /// `PUT /beers/:id` attaching a review. Expects 204.
    pub async fn add_review(
        &self,
        credentials: &LoginHash,
        payload: &ReviewPayload,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}", BEERS_PATH, payload.id);
        let (name, value) = build_auth_header(credentials);
        let request = self
            .client
            .put(self.url(&path)?)
            .header(name, value)
            .header(CONTENT_TYPE, "application/json")
            .json(payload);
        let response = send(request, &path).await?;
        expect_success(response, &path).await?;
        Ok(())
    }

    /// `POST /users`. 201 on success, 422 when the username is taken.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError> {
        let request = self
            .client
            .post(self.url(USERS_PATH)?)
            .header(ACCEPT, "application/json")
            .json(user);
        let response = send(request, USERS_PATH).await?;
        let response = expect_success(response, USERS_PATH).await?;
        decode(response, USERS_PATH).await
    }

    /// `GET /users/login` with Basic auth. 422 on bad credentials.
    pub async fn login(&self, credentials: &LoginHash) -> Result<UserRecord, ApiError> {
        let (name, value) = build_auth_header(credentials);
        let request = self
            .client
            .get(self.url(LOGIN_PATH)?)
            .header(ACCEPT, "application/json")
            .header(name, value);
        let response = send(request, LOGIN_PATH).await?;
        let response = expect_success(response, LOGIN_PATH).await?;
        decode(response, LOGIN_PATH).await
    }
}

async fn send(request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| ApiError::Transport {
        endpoint: endpoint.to_string(),
        source: e,
    })?;
    tracing::debug!(endpoint, status = response.status().as_u16(), "api response");
    Ok(response)
}

async fn expect_success(response: Response, endpoint: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Rejected {
            endpoint: endpoint.to_string(),
            message: rejection_message(&body),
        });
    }

    Err(ApiError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
    })
}

async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source: e,
    })
}

/// Pull a human message out of a 422 body.
///
/// The server answers with `{"message": "..."}`, `{"error": "..."}` or
/// plain text depending on the route.
fn rejection_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let from_json = parsed.as_ref().and_then(|value| {
        ["message", "error", "reason"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    });

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => "Unprocessable Entity".to_string(),
        None => body.trim().to_string(),
    }
}
