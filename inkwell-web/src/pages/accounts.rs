use crate::api::ApiClient;
use shared::models::AccountSummary;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Admin listing of reader accounts, filterable by email.
#[function_component(AccountsPage)]
pub fn accounts_page() -> Html {
    let accounts = use_state(|| None::<Vec<AccountSummary>>);
    let filter = use_state(String::new);
    let error = use_state(|| None::<String>);

    let load = {
        let accounts = accounts.clone();
        let error = error.clone();
        Callback::from(move |query: String| {
            let accounts = accounts.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().accounts(&query).await {
                    Ok(items) => accounts.set(Some(items)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(String::new());
            || ()
        });
    }

    let on_filter_input = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(input.value());
            }
        })
    };

    let on_search = {
        let filter = filter.clone();
        let load = load.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            load.emit((*filter).clone());
        })
    };

    let remove_account = {
        let accounts = accounts.clone();
        let error = error.clone();
        Callback::from(move |user_id: Uuid| {
            let accounts = accounts.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_user(user_id).await {
                    Ok(()) => {
                        if let Some(mut current) = (*accounts).clone() {
                            current.retain(|account| account.id != user_id);
                            accounts.set(Some(current));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <section class="space-y-4">
            <h1 class="text-2xl font-bold">{"Accounts"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <form class="flex gap-x-2 max-w-md" onsubmit={on_search}>
                <input
                    class="input input-bordered flex-grow"
                    placeholder="Filter by email"
                    value={(*filter).clone()}
                    oninput={on_filter_input}
                />
                <button class="btn btn-outline" type="submit">{"Search"}</button>
            </form>
            {
                match &*accounts {
                    None => html! { <crate::components::Loading /> },
                    Some(items) => html! {
                        <table class="table border">
                            <thead>
                                <tr>
                                    <th>{"First Name"}</th>
                                    <th>{"Last Name"}</th>
                                    <th>{"Email"}</th>
                                    <th>{"Role"}</th>
                                    <th>{"Last Login"}</th>
                                    <th>{"Joined"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    items.iter().map(|account| {
                                        let on_remove = {
                                            let remove_account = remove_account.clone();
                                            let user_id = account.id;
                                            Callback::from(move |_: MouseEvent| {
                                                remove_account.emit(user_id);
                                            })
                                        };
                                        html! {
                                            <tr key={account.id.to_string()}>
                                                <td>{ &account.first_name }</td>
                                                <td>{ &account.last_name }</td>
                                                <td>{ &account.email }</td>
                                                <td>
                                                    <span class="badge">{ account.role.as_str() }</span>
                                                </td>
                                                <td>{ account.last_login.format_long() }</td>
                                                <td>{ account.created_at.format_long() }</td>
                                                <td>
                                                    <button class="btn btn-ghost btn-xs" onclick={on_remove}>
                                                        {"Remove"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    },
                }
            }
        </section>
    }
}
