use crate::api::ApiClient;
use crate::routes::{AdminRoute, MainRoute};
use shared::models::Article;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Admin listing of published articles with edit/retire actions.
#[function_component(AdminArticlesPage)]
pub fn admin_articles_page() -> Html {
    let articles = use_state(|| None::<Vec<Article>>);
    let error = use_state(|| None::<String>);

    {
        let articles = articles.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::shared().articles(None).await {
                    Ok(items) => articles.set(Some(items)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let remove_article = {
        let articles = articles.clone();
        let error = error.clone();
        Callback::from(move |article_id: Uuid| {
            let articles = articles.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_article(article_id).await {
                    Ok(()) => {
                        if let Some(mut current) = (*articles).clone() {
                            current.retain(|article| article.id != article_id);
                            articles.set(Some(current));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <section class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Articles"}</h1>
                <Link<AdminRoute> to={AdminRoute::CreateArticle} classes="btn btn-primary btn-sm">
                    {"New article"}
                </Link<AdminRoute>>
            </div>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            {
                match &*articles {
                    None => html! { <crate::components::Loading /> },
                    Some(items) if items.is_empty() => html! {
                        <p class="text-base-content/70">{"Nothing published yet."}</p>
                    },
                    Some(items) => html! {
                        <table class="table border">
                            <thead>
                                <tr>
                                    <th>{"Title"}</th>
                                    <th>{"Published"}</th>
                                    <th>{"Votes"}</th>
                                    <th>{"Comments"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    items.iter().map(|article| {
                                        let on_remove = {
                                            let remove_article = remove_article.clone();
                                            let article_id = article.id;
                                            Callback::from(move |_: MouseEvent| {
                                                remove_article.emit(article_id);
                                            })
                                        };
                                        html! {
                                            <tr key={article.id.to_string()}>
                                                <td>
                                                    <Link<MainRoute>
                                                        to={MainRoute::ArticleView {
                                                            article_id: article.id.to_string(),
                                                        }}
                                                        classes="link"
                                                    >
                                                        { &article.title }
                                                    </Link<MainRoute>>
                                                </td>
                                                <td>{ article.created_at.format_long() }</td>
                                                <td>{ article.votes.len() }</td>
                                                <td>{ article.comments.len() }</td>
                                                <td class="flex gap-x-1">
                                                    <Link<AdminRoute>
                                                        to={AdminRoute::UpdateArticle {
                                                            article_id: article.id.to_string(),
                                                        }}
                                                        classes="btn btn-ghost btn-xs"
                                                    >
                                                        {"Edit"}
                                                    </Link<AdminRoute>>
                                                    <button class="btn btn-ghost btn-xs" onclick={on_remove}>
                                                        {"Delete"}
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
