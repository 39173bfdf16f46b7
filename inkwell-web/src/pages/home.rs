use crate::api::ApiClient;
use crate::auth::session;
use crate::routes::MainRoute;
use shared::models::{Article, Tag};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Article card used by the home, tag and search listings.
#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: Article,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    html! {
        <Link<MainRoute> to={MainRoute::ArticleView { article_id: article.id.to_string() }}>
            <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                <figure>
                    <img src={article.article_img_url.clone()} alt={article.title.clone()} />
                </figure>
                <div class="card-body">
                    <h2 class="card-title">{ &article.title }</h2>
                    <p class="text-base-content/70">{ &article.description }</p>
                    <div class="flex items-center gap-x-3 text-sm text-base-content/60">
                        <span>{ article.created_at.format_long() }</span>
                        <span>{ format!("{} votes", article.votes.len()) }</span>
                        <span>{ format!("{} comments", article.comments.len()) }</span>
                    </div>
                </div>
            </div>
        </Link<MainRoute>>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let articles = use_state(|| None::<Vec<Article>>);
    let tags = use_state(Vec::<Tag>::new);
    let error = use_state(|| None::<String>);

    {
        let articles = articles.clone();
        let tags = tags.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();

                match client.articles(None).await {
                    Ok(items) => articles.set(Some(items)),
                    Err(err) => error.set(Some(err.to_string())),
                }

                // The tag rail rarely changes; reuse the tab cache when
                // it is warm.
                match session::cached_tags() {
                    Some(cached) => tags.set(cached),
                    None => {
                        if let Ok(items) = client.tags().await {
                            session::cache_tags(&items);
                            tags.set(items);
                        }
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
            <section class="lg:col-span-3 space-y-4">
                if let Some(message) = &*error {
                    <div class="alert alert-error"><span>{message.clone()}</span></div>
                }
                {
                    match &*articles {
                        None => html! { <crate::components::Loading /> },
                        Some(items) if items.is_empty() => html! {
                            <p class="text-base-content/70">{"No articles yet."}</p>
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
            </section>
            <aside class="space-y-2">
                <h2 class="font-bold text-lg">{"Tags"}</h2>
                <div class="flex flex-wrap gap-2">
                    {
                        tags.iter()
                            .map(|tag| {
                                html! {
                                    <Link<MainRoute>
                                        key={tag.id}
                                        to={MainRoute::TagView { tag_id: tag.id.to_string() }}
                                        classes="badge badge-outline"
                                    >
                                        { &tag.name }
                                    </Link<MainRoute>>
                                }
                            })
                            .collect::<Html>()
                    }
                </div>
            </aside>
        </div>
    }
}
