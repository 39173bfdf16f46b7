//! Role gate for route subtrees.
//!
//! The decision itself is a pure function of (role, token presence,
//! allowed roles); the component maps it onto render-or-redirect,
//! keeping the attempted route in navigation state so login can send
//! the user back where they were headed.

#[cfg(test)]
#[path = "require_role_test.rs"]
mod require_role_test;

use crate::components::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Outcome of an authorization check against a route subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Role is allowed; render the subtree.
    Grant,
    /// Signed in, but the role does not cover this subtree.
    ToUnauthorized,
    /// Not signed in at all; the attempted route travels along so
    /// login can return the user.
    ToLogin,
}

/// Map the current session against a subtree's allowed roles.
pub fn access_decision(
    role: Option<Role>,
    has_token: bool,
    allowed: &[Role],
) -> AccessDecision {
    match role {
        Some(role) if allowed.contains(&role) => AccessDecision::Grant,
        _ if has_token => AccessDecision::ToUnauthorized,
        _ => AccessDecision::ToLogin,
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    /// Roles permitted to see the children.
    pub allowed: Vec<Role>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let session = use_selector(|state: &AppState| state.session);
    let navigator = use_navigator().expect("RequireRole rendered outside a router");
    let attempted = use_route::<MainRoute>().unwrap_or(MainRoute::NotFound);

    // The gate keeps this subtree unmounted until verification has
    // resolved, so Verifying here means a composition mistake; hold at
    // the loading view rather than misclassifying the session.
    let decision = session
        .is_ready()
        .then(|| access_decision(session.role(), session.has_credential(), &props.allowed));

    use_effect_with(decision, move |decision| {
        match decision {
            Some(AccessDecision::ToUnauthorized) => {
                navigator.replace_with_state(&MainRoute::Unauthorized, attempted);
            }
            Some(AccessDecision::ToLogin) => {
                navigator.replace_with_state(&MainRoute::Login, attempted);
            }
            Some(AccessDecision::Grant) | None => {}
        }
        || ()
    });

    match decision {
        None => html! { <Loading /> },
        Some(AccessDecision::Grant) => html! { <>{ props.children.clone() }</> },
        Some(AccessDecision::ToUnauthorized | AccessDecision::ToLogin) => html! {},
    }
}
