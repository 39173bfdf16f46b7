#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::components::{RequireRole, SessionGate};
use crate::containers::layout::Layout;
use crate::pages::*;
use shared::models::Role;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/search")]
    Search,
    #[at("/tag/:tag_id")]
    TagView { tag_id: String },
    #[at("/article/:article_id")]
    ArticleView { article_id: String },
    #[at("/account")]
    Account,
    #[at("/unauthorized")]
    Unauthorized,
    #[at("/dashboard")]
    DashboardRoot,
    #[at("/dashboard/*")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The admin dashboard routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/accounts")]
    Accounts,
    #[at("/dashboard/articles")]
    Articles,
    #[at("/dashboard/tags")]
    Tags,
    #[at("/dashboard/article/create")]
    CreateArticle,
    #[at("/dashboard/article/:article_id/update")]
    UpdateArticle { article_id: String },
    #[not_found]
    #[at("/dashboard/404")]
    NotFound,
}

/// Switch function for the main routes. Public pages render directly;
/// the account and dashboard subtrees sit behind the session gate and
/// a role guard.
pub fn switch_main(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {:?}", route).as_str());
    match route {
        MainRoute::Home => html! { <Layout><HomePage /></Layout> },
        MainRoute::Login => html! { <Layout><LoginPage /></Layout> },
        MainRoute::Register => html! { <Layout><RegisterPage /></Layout> },
        MainRoute::Search => html! { <Layout><SearchPage /></Layout> },
        MainRoute::TagView { tag_id } => html! { <Layout><TagPage {tag_id} /></Layout> },
        MainRoute::ArticleView { article_id } => {
            html! { <Layout><ArticlePage {article_id} /></Layout> }
        }
        MainRoute::Account => html! {
            <SessionGate>
                <RequireRole allowed={vec![Role::User, Role::Admin]}>
                    <Layout><AccountPage /></Layout>
                </RequireRole>
            </SessionGate>
        },
        MainRoute::Unauthorized => html! { <Layout><UnauthorizedPage /></Layout> },
        MainRoute::DashboardRoot | MainRoute::Dashboard => html! {
            <SessionGate>
                <RequireRole allowed={vec![Role::Admin]}>
                    <Switch<AdminRoute> render={switch_admin} />
                </RequireRole>
            </SessionGate>
        },
        MainRoute::NotFound => html! { <Layout><NotFoundPage /></Layout> },
    }
}

/// Switch function for the admin routes.
fn switch_admin(route: AdminRoute) -> Html {
    log(std::format!("Switching to admin route: {:?}", route).as_str());
    match route {
        AdminRoute::Overview => html! { <Layout><DashboardPage /></Layout> },
        AdminRoute::Accounts => html! { <Layout><AccountsPage /></Layout> },
        AdminRoute::Articles => html! { <Layout><AdminArticlesPage /></Layout> },
        AdminRoute::Tags => html! { <Layout><AdminTagsPage /></Layout> },
        AdminRoute::CreateArticle => {
            html! { <Layout><ArticleEditorPage article_id={None::<String>} /></Layout> }
        }
        AdminRoute::UpdateArticle { article_id } => {
            html! { <Layout><ArticleEditorPage article_id={Some(article_id)} /></Layout> }
        }
        AdminRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> },
    }
}
