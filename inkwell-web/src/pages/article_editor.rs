use crate::api::ApiClient;
use crate::routes::AdminRoute;
use shared::models::{ArticleCreateRequest, ArticleUpdateRequest};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ArticleEditorPageProps {
    /// `None` for a fresh draft, `Some` to edit an existing article.
    #[prop_or_default]
    pub article_id: Option<String>,
}

/// Create/update form for articles. The body is plain HTML; rich-text
/// editing is out of scope for this client.
#[function_component(ArticleEditorPage)]
pub fn article_editor_page(props: &ArticleEditorPageProps) -> Html {
    let title = use_state(String::new);
    let image_url = use_state(String::new);
    let description = use_state(String::new);
    let content = use_state(String::new);
    let tag_ids = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let navigator = use_navigator();

    let editing = props
        .article_id
        .as_ref()
        .and_then(|id| Uuid::parse_str(id).ok());

    {
        let title = title.clone();
        let image_url = image_url.clone();
        let description = description.clone();
        let content = content.clone();
        let tag_ids = tag_ids.clone();
        let error = error.clone();
        use_effect_with(editing, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    match ApiClient::shared().article(id).await {
                        Ok(article) => {
                            title.set(article.title.clone());
                            image_url.set(article.article_img_url.clone());
                            description.set(article.description.clone());
                            content.set(article.content.clone());
                            tag_ids.set(
                                article
                                    .tags
                                    .iter()
                                    .map(|tag| tag.id.to_string())
                                    .collect::<Vec<_>>()
                                    .join(", "),
                            );
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            || ()
        });
    }

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    let onsubmit = {
        let title = title.clone();
        let image_url = image_url.clone();
        let description = description.clone();
        let content = content.clone();
        let tag_ids = tag_ids.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if (*title).trim().is_empty() || (*content).trim().is_empty() {
                error.set(Some("A title and a body are required".to_string()));
                return;
            }
            let tags: Vec<i64> = (*tag_ids)
                .split(',')
                .filter_map(|part| part.trim().parse().ok())
                .collect();

            saving.set(true);
            let title_value = (*title).trim().to_lowercase().replace(' ', "-");
            let image_value = (*image_url).clone();
            let description_value = (*description).clone();
            let content_value = (*content).clone();
            let error = error.clone();
            let saving = saving.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let outcome = match editing {
                    None => {
                        let request = ArticleCreateRequest {
                            title: title_value,
                            article_img_url: image_value,
                            description: (!description_value.is_empty())
                                .then_some(description_value),
                            content: content_value,
                            tags,
                        };
                        client.create_article(&request).await
                    }
                    Some(article_id) => {
                        let request = ArticleUpdateRequest {
                            title: Some(title_value),
                            article_img_url: Some(image_value),
                            description: Some(description_value),
                            content: Some(content_value),
                            tags: Some(tags),
                        };
                        client.update_article(article_id, &request).await
                    }
                };
                match outcome {
                    Ok(_) => {
                        if let Some(ref nav) = navigator {
                            nav.push(&AdminRoute::Articles);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let heading = if editing.is_some() {
        "Edit article"
    } else {
        "New article"
    };

    html! {
        <form class="max-w-3xl mx-auto space-y-4" onsubmit={onsubmit}>
            <h1 class="text-2xl font-bold">{heading}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <div class="form-control">
                <label class="label" for="title"><span class="label-text">{"Title"}</span></label>
                <input
                    id="title"
                    class="input input-bordered"
                    value={(*title).clone()}
                    oninput={bind_input(&title)}
                />
            </div>
            <div class="form-control">
                <label class="label" for="image_url">
                    <span class="label-text">{"Cover image URL"}</span>
                </label>
                <input
                    id="image_url"
                    class="input input-bordered"
                    value={(*image_url).clone()}
                    oninput={bind_input(&image_url)}
                />
            </div>
            <div class="form-control">
                <label class="label" for="description">
                    <span class="label-text">{"Description"}</span>
                </label>
                <input
                    id="description"
                    class="input input-bordered"
                    value={(*description).clone()}
                    oninput={bind_input(&description)}
                />
            </div>
            <div class="form-control">
                <label class="label" for="content"><span class="label-text">{"Body"}</span></label>
                <textarea
                    id="content"
                    class="textarea textarea-bordered h-64"
                    value={(*content).clone()}
                    oninput={on_content_input}
                />
            </div>
            <div class="form-control">
                <label class="label" for="tag_ids">
                    <span class="label-text">{"Tag ids (comma separated)"}</span>
                </label>
                <input
                    id="tag_ids"
                    class="input input-bordered"
                    placeholder="1, 4, 7"
                    value={(*tag_ids).clone()}
                    oninput={bind_input(&tag_ids)}
                />
            </div>
            <button class="btn btn-primary" type="submit" disabled={*saving}>
                {if *saving { "Saving..." } else { "Publish" }}
            </button>
        </form>
    }
}
