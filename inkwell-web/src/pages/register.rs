use crate::api::ApiClient;
use crate::auth::validation;
use crate::models::app_state::{AppState, SessionPhase};
use crate::routes::MainRoute;
use shared::models::{RegisterRequest, Role};
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

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let verification = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let verification = verification.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            // All field checks run locally; nothing leaves the browser
            // until they pass.
            if let Err(invalid) = validation::validate_registration(
                &first_name,
                &last_name,
                &email,
                &password,
                &verification,
            ) {
                error_handle.set(Some(invalid.notice().to_string()));
                return;
            }

            loading_handle.set(true);
            error_handle.set(None);
            let request = RegisterRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.register(&request).await {
                    Ok(auth) => {
                        dispatch.reduce_mut(|state| {
                            state.session = SessionPhase::Authenticated(auth.role);
                        });
                        if let Some(ref nav) = navigator {
                            match auth.role {
                                Role::Admin => nav.push(&MainRoute::DashboardRoot),
                                Role::User => nav.back(),
                            }
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    <p class="text-sm text-base-content/70">
                        {"Enter your email below to create your account"}
                    </p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="grid grid-cols-2 gap-x-2">
                        <div class="form-control">
                            <label class="label" for="first_name">
                                <span class="label-text">{"First Name"}</span>
                            </label>
                            <input
                                id="first_name"
                                class="input input-bordered"
                                type="text"
                                placeholder="John"
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
                                placeholder="King"
                                value={(*last_name).clone()}
                                oninput={bind_input(&last_name)}
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="text"
                            placeholder="user@example.com"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
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
                            oninput={bind_input(&password)}
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
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
