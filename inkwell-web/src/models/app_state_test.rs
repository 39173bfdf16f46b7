use super::*;

#[test]
fn default_phase_is_verifying() {
    assert_eq!(SessionPhase::default(), SessionPhase::Verifying);
    assert!(!SessionPhase::Verifying.is_ready());
}

#[test]
fn phase_role_projection() {
    assert_eq!(SessionPhase::Verifying.role(), None);
    assert_eq!(SessionPhase::Anonymous.role(), None);
    assert_eq!(
        SessionPhase::Authenticated(Role::Admin).role(),
        Some(Role::Admin)
    );
}

#[test]
fn only_authenticated_holds_credential() {
    assert!(!SessionPhase::Verifying.has_credential());
    assert!(!SessionPhase::Anonymous.has_credential());
    assert!(SessionPhase::Authenticated(Role::User).has_credential());
}

#[test]
fn anonymous_and_authenticated_are_ready() {
    assert!(SessionPhase::Anonymous.is_ready());
    assert!(SessionPhase::Authenticated(Role::User).is_ready());
}
