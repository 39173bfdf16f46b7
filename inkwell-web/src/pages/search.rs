use crate::api::ApiClient;
use crate::pages::home::ArticleCard;
use shared::models::Article;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let query = use_state(String::new);
    let results = use_state(|| None::<Vec<Article>>);
    let error = use_state(|| None::<String>);
    let searching = use_state(|| false);

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let onsubmit = {
        let query = query.clone();
        let results = results.clone();
        let error = error.clone();
        let searching = searching.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let term = (*query).trim().to_string();
            if term.is_empty() {
                return;
            }
            searching.set(true);
            let results = results.clone();
            let error = error.clone();
            let searching = searching.clone();
            spawn_local(async move {
                match ApiClient::shared().articles(Some(&term)).await {
                    Ok(items) => {
                        error.set(None);
                        results.set(Some(items));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                searching.set(false);
            });
        })
    };

    html! {
        <div class="max-w-3xl mx-auto space-y-4">
            <form class="flex gap-x-2" onsubmit={onsubmit}>
                <input
                    class="input input-bordered flex-grow"
                    type="text"
                    placeholder="Search articles"
                    value={(*query).clone()}
                    oninput={on_query_input}
                />
                <button class="btn btn-primary" type="submit" disabled={*searching}>
                    {if *searching { "Searching..." } else { "Search" }}
                </button>
            </form>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            {
                match &*results {
                    None => html! {},
                    Some(items) if items.is_empty() => html! {
                        <p class="text-base-content/70">{"Nothing matched your search."}</p>
                    },
                    Some(items) => items
                        .iter()
                        .map(|article| {
                            html! {
                                <ArticleCard key={article.id.to_string()} article={article.clone()} />
                            }
                        })
                        .collect::<Html>(),
                }
            }
        </div>
    }
}
