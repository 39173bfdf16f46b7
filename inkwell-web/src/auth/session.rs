//! Durable sign-in marker and tab-scoped caches.
//!
//! The marker is a boolean flag plus the account id, kept in
//! `localStorage` so reloads know whether a silent refresh is worth
//! attempting. The access token itself is never stored here — only the
//! non-sensitive marker survives a reload. The cached profile and tag
//! rail live in `sessionStorage` and die with the tab.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use shared::models::{CurrentUser, Tag};
use uuid::Uuid;

const SIGNED_IN_KEY: &str = "SI";
const USER_ID_KEY: &str = "id";
const PROFILE_KEY: &str = "current_user";
const TAGS_KEY: &str = "tags";

/// What the bootstrap gate should do on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPlan {
    /// A token is already in memory; no network call needed.
    UseExistingToken,
    /// No token but a marker — one silent refresh attempt.
    AttemptRefresh,
    /// No token, no marker — anonymous, skip the doomed refresh.
    TreatAsAnonymous,
}

/// Decide the bootstrap path from what survived the reload.
pub fn bootstrap_plan(has_token: bool, marker_present: bool) -> BootstrapPlan {
    if has_token {
        BootstrapPlan::UseExistingToken
    } else if marker_present {
        BootstrapPlan::AttemptRefresh
    } else {
        BootstrapPlan::TreatAsAnonymous
    }
}

/// Record a successful sign-in. Overwrites any previous marker.
pub fn remember_sign_in(user_id: Uuid) {
    let _ = LocalStorage::set(SIGNED_IN_KEY, true);
    let _ = LocalStorage::set(USER_ID_KEY, user_id);
}

/// Whether a sign-in marker is present.
pub fn is_signed_in() -> bool {
    LocalStorage::get::<bool>(SIGNED_IN_KEY).unwrap_or(false)
}

/// The account id recorded at sign-in, used to mark the reader's own
/// votes and comments without a profile fetch.
pub fn signed_in_user_id() -> Option<Uuid> {
    if is_signed_in() {
        LocalStorage::get(USER_ID_KEY).ok()
    } else {
        None
    }
}

/// Remove the sign-in marker. Safe to call when none exists.
pub fn clear_marker() {
    LocalStorage::delete(SIGNED_IN_KEY);
    LocalStorage::delete(USER_ID_KEY);
}

/// Cache the signed-in profile for this tab.
pub fn cache_profile(profile: &CurrentUser) {
    let _ = SessionStorage::set(PROFILE_KEY, profile);
}

/// The tab-cached profile, if any.
pub fn cached_profile() -> Option<CurrentUser> {
    SessionStorage::get(PROFILE_KEY).ok()
}

/// Drop the cached profile.
pub fn clear_profile() {
    SessionStorage::delete(PROFILE_KEY);
}

/// Cache the tag rail for this tab so the home page doesn't refetch it
/// on every visit.
pub fn cache_tags(tags: &[Tag]) {
    let _ = SessionStorage::set(TAGS_KEY, tags);
}

/// The tab-cached tag rail, if any.
pub fn cached_tags() -> Option<Vec<Tag>> {
    SessionStorage::get(TAGS_KEY).ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn marker_roundtrip() {
        let id = Uuid::new_v4();
        remember_sign_in(id);
        assert!(is_signed_in());
        assert_eq!(signed_in_user_id(), Some(id));

        clear_marker();
        // Clearing twice must stay a no-op.
        clear_marker();
        assert!(!is_signed_in());
        assert_eq!(signed_in_user_id(), None);
    }

    #[wasm_bindgen_test]
    fn profile_cache_overwrites() {
        let profile = shared::models::CurrentUser {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        cache_profile(&profile);
        assert_eq!(cached_profile(), Some(profile.clone()));

        let renamed = shared::models::CurrentUser {
            first_name: "Augusta".to_string(),
            ..profile
        };
        cache_profile(&renamed);
        assert_eq!(cached_profile(), Some(renamed));

        clear_profile();
        assert_eq!(cached_profile(), None);
    }
}
