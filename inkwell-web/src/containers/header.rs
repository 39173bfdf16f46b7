//! Page header.
//!
//! Anonymous visitors get login/register links; a signed-in reader
//! (known from the durable marker, like the rest of the anonymous/
//! signed-in split) gets the account menu and logout.

use crate::api::ApiClient;
use crate::auth::session;
use crate::models::app_state::{AppState, SessionPhase};
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_selector, use_store};

#[function_component(Header)]
pub fn header() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let profile = use_selector(|state: &AppState| state.profile.clone());
    let navigator = use_navigator().expect("Header rendered outside a router");
    let signed_in = session::is_signed_in();

    let account_label = (*profile)
        .as_ref()
        .map_or_else(|| "Account".to_string(), |user| user.first_name.clone());

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Best effort server-side; local state always clears.
                ApiClient::shared().logout().await;
                dispatch.reduce_mut(|state| {
                    state.session = SessionPhase::Anonymous;
                    state.profile = None;
                });
                navigator.push(&MainRoute::Home);
            });
        })
    };

    html! {
        <header class="h-16 px-6 border-b flex items-center justify-between">
            <div>
                <Link<MainRoute> to={MainRoute::Home}>
                    <p class="font-bold text-2xl">
                        {"inkwell"}
                        <span class="text-error">{"."}</span>
                    </p>
                </Link<MainRoute>>
            </div>
            {
                if signed_in {
                    html! {
                        <div class="flex items-center gap-x-3">
                            <Link<MainRoute> to={MainRoute::Search} classes="btn btn-ghost btn-circle">
                                {"Search"}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Account} classes="btn btn-ghost">
                                { account_label }
                            </Link<MainRoute>>
                            <a class="btn btn-ghost" onclick={on_logout}>{"Logout"}</a>
                        </div>
                    }
                } else {
                    html! {
                        <div class="flex items-center gap-x-3">
                            <Link<MainRoute> to={MainRoute::Search} classes="btn btn-ghost btn-circle">
                                {"Search"}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-secondary font-semibold">
                                {"Log in"}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary font-semibold">
                                {"Register"}
                            </Link<MainRoute>>
                        </div>
                    }
                }
            }
        </header>
    }
}
