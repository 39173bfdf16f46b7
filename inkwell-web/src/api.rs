//! HTTP gateway for the Inkwell backend.
//!
//! All traffic goes through [`ApiClient`]. Authenticated calls read the
//! bearer token from the credential store at send time, and a 401 is
//! recovered transparently by one refresh-and-resend per request.
//! Concurrent refreshes collapse onto a single in-flight call so a
//! burst of expired requests consumes the refresh credential once.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::auth::credentials::{Credential, CredentialStore};
use crate::auth::session;
use crate::config::FrontendConfig;
use crate::error::{self, ApiError};
use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AccountSummary, Article, ArticleCreateRequest, ArticleUpdateRequest, AuthSession, Comment,
    CommentRequest, CurrentUser, EmailUpdateRequest, LoginForm, LogoutRequest, NameUpdateRequest,
    PasswordUpdateAck, PasswordUpdateRequest, RegisterRequest, Tag, TagCreateRequest, VoteReceipt,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

type RefreshOutcome = Result<AuthSession, ApiError>;
type InFlightRefresh = Shared<LocalBoxFuture<'static, RefreshOutcome>>;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();
}

/// API client carrying the credential store and the refresh state.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    credentials: CredentialStore,
    refresh_in_flight: Rc<RefCell<Option<InFlightRefresh>>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with its own empty credential store.
    pub fn new(base_url: &str) -> Self {
        Self::with_credentials(base_url, CredentialStore::new())
    }

    /// Create a client over an injected credential store.
    pub fn with_credentials(base_url: &str, credentials: CredentialStore) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            credentials,
            refresh_in_flight: Rc::new(RefCell::new(None)),
        }
    }

    /// The app-wide client. One per tab; every component shares its
    /// credential store.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    /// The credential store backing this client.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token the store holds *now*. Called once per
    /// physical send so a refresh landing in between is observed.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.bearer() {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }

    /// Send an authenticated request; on 401, refresh once and resend
    /// once with the token the store holds after the refresh. A second
    /// 401 propagates — no loops.
    async fn send_with_auth<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = self
            .authorize(build())
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return error::ok_or_reject(response).await;
        }

        if self.refresh().await.is_err() {
            // Session over; refresh already cleared the marker when the
            // failure was definitive.
            return Err(ApiError::AuthExpired);
        }

        let retry = self
            .authorize(build())
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))?;
        error::ok_or_reject(retry).await
    }

    async fn json_with_auth<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let response = self.send_with_auth(build).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))
    }

    async fn unit_with_auth<F>(&self, build: F) -> Result<(), ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        self.send_with_auth(build).await.map(|_| ())
    }

    async fn json_public<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))?;
        let response = error::ok_or_reject(response).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))
    }

    fn store_session(&self, auth: &AuthSession) {
        self.credentials.set(Credential {
            access_token: auth.access_token.clone(),
            role: auth.role,
        });
    }

    // --- auth ---------------------------------------------------------

    /// Authenticate with email/password. On success the credential
    /// store is populated and the durable sign-in marker written.
    pub async fn login(&self, form: &LoginForm) -> Result<AuthSession, ApiError> {
        let url = self.api_url("login");
        let auth: AuthSession = self.json_public(self.client.post(url).form(form)).await?;
        self.store_session(&auth);
        session::remember_sign_in(auth.id);
        Ok(auth)
    }

    /// Create an account. Same side effects as [`Self::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        let url = self.api_url("register");
        let auth: AuthSession = self.json_public(self.client.post(url).json(request)).await?;
        self.store_session(&auth);
        session::remember_sign_in(auth.id);
        Ok(auth)
    }

    /// Exchange the refresh cookie for a fresh access credential,
    /// updating the store. Concurrent callers share one request; every
    /// waiter observes the same outcome.
    pub async fn refresh(&self) -> Result<AuthSession, ApiError> {
        self.refresh_future().await
    }

    /// The current in-flight refresh, starting one if none is running.
    fn refresh_future(&self) -> InFlightRefresh {
        let pending = self.refresh_in_flight.borrow().clone();
        if let Some(in_flight) = pending {
            return in_flight;
        }

        let url = self.api_url("refresh");
        let client = self.client.clone();
        let credentials = self.credentials.clone();
        let slot = self.refresh_in_flight.clone();
        let future: InFlightRefresh = async move {
            let outcome = Self::execute_refresh(&client, &url, &credentials).await;
            // Free the slot first so a later 401 starts a new attempt
            // instead of re-observing this resolved one.
            slot.borrow_mut().take();
            outcome
        }
        .boxed_local()
        .shared();

        *self.refresh_in_flight.borrow_mut() = Some(future.clone());
        future
    }

    async fn execute_refresh(
        client: &Client,
        url: &str,
        credentials: &CredentialStore,
    ) -> RefreshOutcome {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))?;

        let response = match error::ok_or_reject(response).await {
            Ok(response) => response,
            Err(err) => {
                // An expired or revoked refresh cookie is definitive:
                // drop the marker so later reloads skip the attempt. A
                // network failure keeps it — the cookie may still work.
                if let ApiError::Rejected {
                    status: 401 | 404, ..
                } = err
                {
                    session::clear_marker();
                }
                return Err(err);
            }
        };

        let auth: AuthSession = response
            .json()
            .await
            .map_err(|err| ApiError::from_reqwest(&err))?;
        credentials.set(Credential {
            access_token: auth.access_token.clone(),
            role: auth.role,
        });
        Ok(auth)
    }

    /// Revoke the session server-side (best effort) and clear every
    /// piece of local session state. Calling this while already logged
    /// out is a no-op that clears local state again.
    pub async fn logout(&self) {
        let body = LogoutRequest {
            access_token: self
                .credentials
                .get()
                .map(|credential| credential.access_token),
        };
        let url = self.api_url("logout");
        let result = self.authorize(self.client.post(url).json(&body)).send().await;

        match result {
            Ok(response) if !response.status().is_success() => {
                log::warn!("logout rejected with status {}", response.status());
            }
            Err(err) => log::warn!("logout request failed: {err}"),
            Ok(_) => {}
        }

        self.credentials.clear();
        session::clear_marker();
        session::clear_profile();
    }

    // --- profile ------------------------------------------------------

    /// Fetch the signed-in profile and refresh the tab cache.
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        let url = self.api_url("current_user");
        let user: CurrentUser = self
            .json_with_auth(move || self.client.get(url.clone()))
            .await?;
        session::cache_profile(&user);
        Ok(user)
    }

    /// Update the account holder's name; the cache is overwritten with
    /// the server's view.
    pub async fn update_name(&self, request: &NameUpdateRequest) -> Result<CurrentUser, ApiError> {
        let url = self.api_url("user/update");
        let user: CurrentUser = self
            .json_with_auth(move || self.client.put(url.clone()).json(request))
            .await?;
        session::cache_profile(&user);
        Ok(user)
    }

    /// Change the account email; the cache is overwritten with the
    /// server's view.
    pub async fn update_email(
        &self,
        request: &EmailUpdateRequest,
    ) -> Result<CurrentUser, ApiError> {
        let url = self.api_url("email/update");
        let user: CurrentUser = self
            .json_with_auth(move || self.client.patch(url.clone()).json(request))
            .await?;
        session::cache_profile(&user);
        Ok(user)
    }

    /// Rotate the password. The ack carries no profile, so the cache is
    /// refreshed with a follow-up fetch.
    pub async fn update_password(
        &self,
        request: &PasswordUpdateRequest,
    ) -> Result<PasswordUpdateAck, ApiError> {
        let url = self.api_url("password/update");
        let ack: PasswordUpdateAck = self
            .json_with_auth(move || self.client.patch(url.clone()).json(request))
            .await?;
        let _ = self.current_user().await;
        Ok(ack)
    }

    /// Delete the signed-in account and clear local session state.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        let url = self.api_url("user/delete");
        self.unit_with_auth(move || self.client.delete(url.clone()))
            .await?;
        self.credentials.clear();
        session::clear_marker();
        session::clear_profile();
        Ok(())
    }

    // --- admin accounts -----------------------------------------------

    /// List accounts, optionally filtered by email substring. Admin
    /// only.
    pub async fn accounts(&self, query: &str) -> Result<Vec<AccountSummary>, ApiError> {
        let url = self.api_url("users");
        let query = query.to_string();
        self.json_with_auth(move || self.client.get(url.clone()).query(&[("query", &query)]))
            .await
    }

    /// Remove another account. Admin only.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("user/{user_id}/delete"));
        self.unit_with_auth(move || self.client.delete(url.clone()))
            .await
    }

    // --- articles -----------------------------------------------------

    /// List articles, optionally filtered by a search query.
    pub async fn articles(&self, query: Option<&str>) -> Result<Vec<Article>, ApiError> {
        let url = self.api_url("articles");
        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }
        self.json_public(request).await
    }

    /// Fetch one article with its tags, votes and comments.
    pub async fn article(&self, article_id: Uuid) -> Result<Article, ApiError> {
        let url = self.api_url(&format!("article/{article_id}"));
        self.json_public(self.client.get(url)).await
    }

    /// Publish a new article.
    pub async fn create_article(&self, request: &ArticleCreateRequest) -> Result<Article, ApiError> {
        let url = self.api_url("article/create");
        self.json_with_auth(move || self.client.post(url.clone()).json(request))
            .await
    }

    /// Update an existing article.
    pub async fn update_article(
        &self,
        article_id: Uuid,
        request: &ArticleUpdateRequest,
    ) -> Result<Article, ApiError> {
        let url = self.api_url(&format!("article/{article_id}/update"));
        self.json_with_auth(move || self.client.put(url.clone()).json(request))
            .await
    }

    /// Remove an article.
    pub async fn delete_article(&self, article_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("article/{article_id}/delete"));
        self.unit_with_auth(move || self.client.delete(url.clone()))
            .await
    }

    // --- tags ---------------------------------------------------------

    /// List all tags.
    pub async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        let url = self.api_url("tags");
        self.json_public(self.client.get(url)).await
    }

    /// Fetch one tag.
    pub async fn tag(&self, tag_id: i64) -> Result<Tag, ApiError> {
        let url = self.api_url(&format!("tag/{tag_id}"));
        self.json_public(self.client.get(url)).await
    }

    /// List the articles carrying a tag.
    pub async fn tag_articles(&self, tag_id: i64) -> Result<Vec<Article>, ApiError> {
        let url = self.api_url(&format!("tag/articles/{tag_id}"));
        self.json_public(self.client.get(url)).await
    }

    /// Create a tag.
    pub async fn create_tag(&self, request: &TagCreateRequest) -> Result<Tag, ApiError> {
        let url = self.api_url("tag/create");
        self.json_with_auth(move || self.client.post(url.clone()).json(request))
            .await
    }

    /// Remove a tag.
    pub async fn delete_tag(&self, tag_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("tag/{tag_id}/delete"));
        self.unit_with_auth(move || self.client.delete(url.clone()))
            .await
    }

    // --- votes & comments ---------------------------------------------

    /// Toggle the caller's vote on an article. The receipt reports
    /// whether the vote was added or removed.
    pub async fn vote(&self, article_id: Uuid) -> Result<VoteReceipt, ApiError> {
        let url = self.api_url(&format!("vote/{article_id}"));
        self.json_with_auth(move || self.client.get(url.clone()))
            .await
    }

    /// Attach a comment to an article.
    pub async fn create_comment(
        &self,
        article_id: Uuid,
        request: &CommentRequest,
    ) -> Result<Comment, ApiError> {
        let url = self.api_url(&format!("comment/{article_id}/create"));
        self.json_with_auth(move || self.client.post(url.clone()).json(request))
            .await
    }

    /// Edit one of the caller's comments.
    pub async fn update_comment(
        &self,
        comment_id: i64,
        request: &CommentRequest,
    ) -> Result<Comment, ApiError> {
        let url = self.api_url(&format!("comment/{comment_id}/update"));
        self.json_with_auth(move || self.client.patch(url.clone()).json(request))
            .await
    }

    /// Remove one of the caller's comments.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        let url = self.api_url(&format!("comment/{comment_id}/delete"));
        self.unit_with_auth(move || self.client.delete(url.clone()))
            .await
    }
}
