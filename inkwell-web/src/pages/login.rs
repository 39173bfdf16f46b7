use crate::api::ApiClient;
use crate::auth::validation;
use crate::models::app_state::{AppState, SessionPhase};
use crate::routes::MainRoute;
use shared::models::{LoginForm, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let location = use_location();
    let (_state, dispatch) = use_store::<AppState>();

    // Where a guard bounced the user from, if anywhere.
    let return_to = location
        .and_then(|location| location.state::<MainRoute>())
        .map(|route| (*route).clone());

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();

            // Field checks run before any network call.
            if let Err(invalid) = validation::validate_login(&email_value, &password_value) {
                error_handle.set(Some(invalid.notice().to_string()));
                return;
            }

            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let return_to = return_to.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let form = LoginForm {
                    username: email_value,
                    password: password_value,
                };
                match client.login(&form).await {
                    Ok(auth) => {
                        dispatch.reduce_mut(|state| {
                            state.session = SessionPhase::Authenticated(auth.role);
                        });
                        if let Some(ref nav) = navigator {
                            let destination = return_to.unwrap_or(match auth.role {
                                Role::Admin => MainRoute::DashboardRoot,
                                Role::User => MainRoute::Home,
                            });
                            nav.replace(&destination);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <p class="text-sm text-base-content/70">
                        {"Enter your email below to access your account"}
                    </p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            placeholder="user@example.com"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Log in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
