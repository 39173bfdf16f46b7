use super::*;

// Storage-backed functions need a browser; the bootstrap decision is
// pure and covered here.

/// A token already in memory wins over everything — no network call.
#[test]
fn existing_token_short_circuits() {
    assert_eq!(bootstrap_plan(true, true), BootstrapPlan::UseExistingToken);
    assert_eq!(bootstrap_plan(true, false), BootstrapPlan::UseExistingToken);
}

/// Marker present, no token: the one case worth a silent refresh.
#[test]
fn marker_without_token_attempts_refresh() {
    assert_eq!(bootstrap_plan(false, true), BootstrapPlan::AttemptRefresh);
}

/// No marker means anonymous — the refresh attempt is skipped entirely.
#[test]
fn absent_marker_is_anonymous() {
    assert_eq!(bootstrap_plan(false, false), BootstrapPlan::TreatAsAnonymous);
}
