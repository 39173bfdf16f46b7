//! Tests for the routing system
//!
//! Validates route paths, parameter handling and the split between the
//! public tree and the guarded dashboard tree.

use super::{AdminRoute, MainRoute};
use yew_router::Routable;

/// Public paths map where the links expect them to.
#[test]
fn main_route_paths() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Login.to_path(), "/login");
    assert_eq!(MainRoute::Register.to_path(), "/register");
    assert_eq!(MainRoute::Search.to_path(), "/search");
    assert_eq!(MainRoute::Unauthorized.to_path(), "/unauthorized");
    assert_eq!(MainRoute::DashboardRoot.to_path(), "/dashboard");
}

#[test]
fn article_route_carries_id() {
    let route = MainRoute::ArticleView {
        article_id: "f47ac10b-58cc-4372-a567-0e02b2c3d479".to_string(),
    };
    assert_eq!(
        route.to_path(),
        "/article/f47ac10b-58cc-4372-a567-0e02b2c3d479"
    );
}

#[test]
fn recognize_extracts_parameters() {
    match MainRoute::recognize("/tag/42") {
        Some(MainRoute::TagView { tag_id }) => assert_eq!(tag_id, "42"),
        other => panic!("expected TagView, got {other:?}"),
    }

    match MainRoute::recognize("/article/abc-123") {
        Some(MainRoute::ArticleView { article_id }) => assert_eq!(article_id, "abc-123"),
        other => panic!("expected ArticleView, got {other:?}"),
    }
}

/// Everything under /dashboard lands in the guarded subtree.
#[test]
fn dashboard_subtree_is_captured() {
    assert_eq!(
        MainRoute::recognize("/dashboard"),
        Some(MainRoute::DashboardRoot)
    );
    assert_eq!(
        MainRoute::recognize("/dashboard/accounts"),
        Some(MainRoute::Dashboard)
    );
    assert_eq!(
        MainRoute::recognize("/dashboard/article/create"),
        Some(MainRoute::Dashboard)
    );
}

#[test]
fn admin_route_paths() {
    assert_eq!(AdminRoute::Overview.to_path(), "/dashboard");
    assert_eq!(AdminRoute::Accounts.to_path(), "/dashboard/accounts");
    assert_eq!(
        AdminRoute::UpdateArticle {
            article_id: "a1".to_string()
        }
        .to_path(),
        "/dashboard/article/a1/update"
    );
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(MainRoute::recognize("/no-such-page"), Some(MainRoute::NotFound));
    assert_eq!(
        AdminRoute::recognize("/dashboard/bogus"),
        Some(AdminRoute::NotFound)
    );
}
