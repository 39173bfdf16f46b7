use crate::api::ApiClient;
use crate::pages::home::ArticleCard;
use shared::models::{Article, Tag};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagPageProps {
    pub tag_id: String,
}

#[function_component(TagPage)]
pub fn tag_page(props: &TagPageProps) -> Html {
    let tag = use_state(|| None::<Tag>);
    let articles = use_state(|| None::<Vec<Article>>);
    let error = use_state(|| None::<String>);

    let tag_id = props.tag_id.parse::<i64>().ok();

    {
        let tag = tag.clone();
        let articles = articles.clone();
        let error = error.clone();
        use_effect_with(tag_id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.tag(id).await {
                        Ok(item) => tag.set(Some(item)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    match client.tag_articles(id).await {
                        Ok(items) => articles.set(Some(items)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            || ()
        });
    }

    if tag_id.is_none() {
        return html! { <super::NotFoundPage /> };
    }

    html! {
        <div class="max-w-3xl mx-auto space-y-4">
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <h1 class="text-3xl font-extrabold">
                {
                    (*tag)
                        .as_ref()
                        .map_or_else(|| "Tag".to_string(), |tag| format!("#{}", tag.name))
                }
            </h1>
            {
                match &*articles {
                    None => html! { <crate::components::Loading /> },
                    Some(items) if items.is_empty() => html! {
                        <p class="text-base-content/70">{"No articles carry this tag yet."}</p>
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
