use super::*;

fn credential(token: &str, role: Role) -> Credential {
    Credential {
        access_token: token.to_string(),
        role,
    }
}

#[test]
fn starts_empty() {
    let store = CredentialStore::new();
    assert!(store.get().is_none());
    assert!(store.bearer().is_none());
    assert!(store.role().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn set_replaces_wholesale() {
    let store = CredentialStore::new();
    store.set(credential("first", Role::User));
    store.set(credential("second", Role::Admin));

    let current = store.get().unwrap();
    assert_eq!(current.access_token, "second");
    assert_eq!(current.role, Role::Admin);
}

/// Every handle observes the same cell — a write through one clone is
/// visible through another immediately.
#[test]
fn clones_share_state() {
    let store = CredentialStore::new();
    let handle = store.clone();

    store.set(credential("tok", Role::User));
    assert_eq!(handle.bearer().as_deref(), Some("Bearer tok"));

    handle.clear();
    assert!(!store.is_authenticated());
}

#[test]
fn bearer_formats_header_value() {
    let store = CredentialStore::new();
    store.set(credential("abc.def.ghi", Role::Admin));
    assert_eq!(store.bearer().as_deref(), Some("Bearer abc.def.ghi"));
}

#[test]
fn clear_is_idempotent() {
    let store = CredentialStore::new();
    store.set(credential("tok", Role::User));
    store.clear();
    store.clear();
    assert!(store.get().is_none());
}
