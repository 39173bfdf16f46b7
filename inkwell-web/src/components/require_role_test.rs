use super::*;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ANY_ACCOUNT: &[Role] = &[Role::User, Role::Admin];

/// Allowed role renders the subtree.
#[test]
fn matching_role_grants() {
    assert_eq!(
        access_decision(Some(Role::Admin), true, ADMIN_ONLY),
        AccessDecision::Grant
    );
    assert_eq!(
        access_decision(Some(Role::User), true, ANY_ACCOUNT),
        AccessDecision::Grant
    );
}

/// Signed in with the wrong role: unauthorized, not login — the user
/// has a session, it just does not cover this subtree.
#[test]
fn wrong_role_with_token_goes_to_unauthorized() {
    assert_eq!(
        access_decision(Some(Role::User), true, ADMIN_ONLY),
        AccessDecision::ToUnauthorized
    );
}

/// No token at all: off to login, so the attempted route can be
/// replayed after signing in.
#[test]
fn no_token_goes_to_login() {
    assert_eq!(
        access_decision(None, false, ADMIN_ONLY),
        AccessDecision::ToLogin
    );
    assert_eq!(
        access_decision(None, false, ANY_ACCOUNT),
        AccessDecision::ToLogin
    );
}

/// An empty allow list admits nobody, but still distinguishes signed-in
/// from anonymous.
#[test]
fn empty_allow_list() {
    assert_eq!(
        access_decision(Some(Role::Admin), true, &[]),
        AccessDecision::ToUnauthorized
    );
    assert_eq!(access_decision(None, false, &[]), AccessDecision::ToLogin);
}
