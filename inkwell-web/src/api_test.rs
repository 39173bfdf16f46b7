use super::*;
use crate::auth::credentials::Credential;
use shared::models::Role;

fn credential(token: &str, role: Role) -> Credential {
    Credential {
        access_token: token.to_string(),
        role,
    }
}

fn authorization_of(request: RequestBuilder) -> Option<String> {
    request
        .build()
        .unwrap()
        .headers()
        .get("Authorization")
        .map(|value| value.to_str().unwrap().to_string())
}

#[test]
fn api_url_joins_without_duplicate_slashes() {
    let client = ApiClient::new("http://localhost:8000/api/v1/");
    assert_eq!(
        client.api_url("/refresh"),
        "http://localhost:8000/api/v1/refresh"
    );
    assert_eq!(
        client.api_url("article/create"),
        "http://localhost:8000/api/v1/article/create"
    );
}

/// No credential, no header — the request goes out anonymous rather
/// than with an empty bearer value.
#[test]
fn authorize_skips_header_when_signed_out() {
    let client = ApiClient::new("http://localhost:8000/api/v1");
    let request = client.authorize(client.client.get("http://localhost:8000/api/v1/users"));
    assert_eq!(authorization_of(request), None);
}

/// The token is read when the request is built for sending, not when
/// the call was planned: a credential swap between two builds of the
/// same request is observed by the second build.
#[test]
fn authorize_reads_store_at_send_time() {
    let client = ApiClient::new("http://localhost:8000/api/v1");
    let build = || client.client.get("http://localhost:8000/api/v1/users");

    client.credentials().set(credential("stale", Role::Admin));
    assert_eq!(
        authorization_of(client.authorize(build())).as_deref(),
        Some("Bearer stale")
    );

    // A refresh lands in between.
    client.credentials().set(credential("fresh", Role::Admin));
    assert_eq!(
        authorization_of(client.authorize(build())).as_deref(),
        Some("Bearer fresh")
    );
}

/// Overlapping refresh callers get the same in-flight future.
#[test]
fn concurrent_refreshes_coalesce() {
    let client = ApiClient::new("http://localhost:8000/api/v1");
    let first = client.refresh_future();
    let second = client.refresh_future();
    assert!(first.ptr_eq(&second));
}

/// Client clones share the refresh slot, so a clone handed to another
/// component still coalesces with the original.
#[test]
fn clones_share_refresh_slot() {
    let client = ApiClient::new("http://localhost:8000/api/v1");
    let clone = client.clone();
    let first = client.refresh_future();
    let second = clone.refresh_future();
    assert!(first.ptr_eq(&second));
}

/// The store is injected, not owned: external writes are visible to
/// the client and vice versa.
#[test]
fn injected_store_is_shared() {
    let store = crate::auth::credentials::CredentialStore::new();
    let client = ApiClient::with_credentials("http://localhost:8000/api/v1", store.clone());

    store.set(credential("external", Role::User));
    let request = client.authorize(client.client.get("http://localhost:8000/api/v1/current_user"));
    assert_eq!(
        authorization_of(request).as_deref(),
        Some("Bearer external")
    );

    client.credentials().clear();
    assert!(store.get().is_none());
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("https://api.example.com/");
    assert_eq!(client.api_url("tags"), "https://api.example.com/tags");
}
