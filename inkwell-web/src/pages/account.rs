//! Account settings: name, email, password, account deletion.
//!
//! The profile comes from the tab cache when warm and is overwritten
//! by the authoritative fetch; every mutation below leaves the cache
//! refreshed through the API client.

use crate::api::ApiClient;
use crate::auth::{session, validation};
use crate::models::app_state::{AppState, SessionPhase};
use crate::routes::MainRoute;
use shared::models::{CurrentUser, EmailUpdateRequest, NameUpdateRequest, PasswordUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(AccountPage)]
pub fn account_page() -> Html {
    let profile = use_state(|| None::<CurrentUser>);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let old_password = use_state(String::new);
    let new_password = use_state(String::new);
    let verification = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    {
        let profile = profile.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            // Cached copy for an instant render; the authoritative
            // fetch overwrites it right after.
            if let Some(cached) = session::cached_profile() {
                first_name.set(cached.first_name.clone());
                last_name.set(cached.last_name.clone());
                email.set(cached.email.clone());
                profile.set(Some(cached));
            }
            spawn_local(async move {
                match ApiClient::shared().current_user().await {
                    Ok(user) => {
                        first_name.set(user.first_name.clone());
                        last_name.set(user.last_name.clone());
                        email.set(user.email.clone());
                        dispatch.reduce_mut(|state| state.profile = Some(user.clone()));
                        profile.set(Some(user));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_name_submit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let profile = profile.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validation::validate_names(&first_name, &last_name) {
                error.set(Some(invalid.notice().to_string()));
                return;
            }
            let request = NameUpdateRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
            };
            let profile = profile.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match ApiClient::shared().update_name(&request).await {
                    Ok(user) => {
                        profile.set(Some(user));
                        error.set(None);
                        notice.set(Some("Name updated".to_string()));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_email_submit = {
        let email = email.clone();
        let profile = profile.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validation::validate_email(&email) {
                error.set(Some(invalid.notice().to_string()));
                return;
            }
            let request = EmailUpdateRequest {
                email: (*email).clone(),
            };
            let profile = profile.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match ApiClient::shared().update_email(&request).await {
                    Ok(user) => {
                        profile.set(Some(user));
                        error.set(None);
                        notice.set(Some("Email updated".to_string()));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_password_submit = {
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let verification = verification.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(invalid) = validation::validate_password_change(&new_password, &verification)
            {
                error.set(Some(invalid.notice().to_string()));
                return;
            }
            let request = PasswordUpdateRequest {
                old_password: (*old_password).clone(),
                new_password: (*new_password).clone(),
            };
            let old_password = old_password.clone();
            let new_password = new_password.clone();
            let verification = verification.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match ApiClient::shared().update_password(&request).await {
                    Ok(ack) => {
                        old_password.set(String::new());
                        new_password.set(String::new());
                        verification.set(String::new());
                        error.set(None);
                        notice.set(Some(ack.message));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_delete = {
        let error = error.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let error = error.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_account().await {
                    Ok(()) => {
                        dispatch.reduce_mut(|state| {
                            state.session = SessionPhase::Anonymous;
                            state.profile = None;
                        });
                        if let Some(ref nav) = navigator {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="max-w-xl mx-auto space-y-8">
            <h1 class="text-3xl font-extrabold">{"Account settings"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            if let Some(message) = &*notice {
                <div class="alert alert-success"><span>{message.clone()}</span></div>
            }

            <form class="card bg-base-100 shadow p-6 space-y-4" onsubmit={on_name_submit}>
                <h2 class="text-xl font-bold">{"Name"}</h2>
                <div class="grid grid-cols-2 gap-x-2">
                    <div class="form-control">
                        <label class="label" for="first_name">
                            <span class="label-text">{"First Name"}</span>
                        </label>
                        <input
                            id="first_name"
                            class="input input-bordered"
                            type="text"
                            value={(*first_name).clone()}
                            oninput={bind_input(&first_name)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="last_name">
                            <span class="label-text">{"Last Name"}</span>
                        </label>
                        <input
                            id="last_name"
                            class="input input-bordered"
                            type="text"
                            value={(*last_name).clone()}
                            oninput={bind_input(&last_name)}
                        />
                    </div>
                </div>
                <button class="btn btn-primary btn-sm self-start" type="submit">
                    {"Save changes"}
                </button>
            </form>

            <form class="card bg-base-100 shadow p-6 space-y-4" onsubmit={on_email_submit}>
                <h2 class="text-xl font-bold">{"Email"}</h2>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered"
                        type="text"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                </div>
                <button class="btn btn-primary btn-sm self-start" type="submit">
                    {"Save changes"}
                </button>
            </form>

            <form class="card bg-base-100 shadow p-6 space-y-4" onsubmit={on_password_submit}>
                <h2 class="text-xl font-bold">{"Password"}</h2>
                <div class="form-control">
                    <label class="label" for="old_password">
                        <span class="label-text">{"Current Password"}</span>
                    </label>
                    <input
                        id="old_password"
                        class="input input-bordered"
                        type="password"
                        value={(*old_password).clone()}
                        oninput={bind_input(&old_password)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="new_password">
                        <span class="label-text">{"New Password"}</span>
                    </label>
                    <input
                        id="new_password"
                        class="input input-bordered"
                        type="password"
                        value={(*new_password).clone()}
                        oninput={bind_input(&new_password)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="verification">
                        <span class="label-text">{"Verify Password"}</span>
                    </label>
                    <input
                        id="verification"
                        class="input input-bordered"
                        type="password"
                        value={(*verification).clone()}
                        oninput={bind_input(&verification)}
                    />
                </div>
                <button class="btn btn-primary btn-sm self-start" type="submit">
                    {"Update password"}
                </button>
            </form>

            <div class="card bg-base-100 shadow p-6 space-y-4">
                <h2 class="text-xl font-bold text-error">{"Delete account"}</h2>
                <p class="text-base-content/70">
                    {"Removes your account and everything attached to it. There is no undo."}
                </p>
                <button class="btn btn-error btn-sm self-start" onclick={on_delete}>
                    {"Delete account"}
                </button>
            </div>
        </div>
    }
}
