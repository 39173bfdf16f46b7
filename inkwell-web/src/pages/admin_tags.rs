use crate::api::ApiClient;
use crate::auth::session;
use shared::models::{Tag, TagCreateRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Admin tag curation: list, create, delete.
#[function_component(AdminTagsPage)]
pub fn admin_tags_page() -> Html {
    let tags = use_state(|| None::<Vec<Tag>>);
    let name = use_state(String::new);
    let parent = use_state(String::new);
    let error = use_state(|| None::<String>);

    {
        let tags = tags.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::shared().tags().await {
                    Ok(items) => tags.set(Some(items)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_parent_input = {
        let parent = parent.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                parent.set(input.value());
            }
        })
    };

    let on_create = {
        let tags = tags.clone();
        let name = name.clone();
        let parent = parent.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let tag_name = (*name).trim().to_lowercase();
            if tag_name.is_empty() {
                return;
            }
            let parent_id = (*parent).trim().parse::<i64>().ok();
            let request = TagCreateRequest {
                parent_id,
                name: tag_name,
            };
            let tags = tags.clone();
            let name = name.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().create_tag(&request).await {
                    Ok(tag) => {
                        if let Some(mut current) = (*tags).clone() {
                            current.push(tag);
                            session::cache_tags(&current);
                            tags.set(Some(current));
                        }
                        name.set(String::new());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let remove_tag = {
        let tags = tags.clone();
        let error = error.clone();
        Callback::from(move |tag_id: i64| {
            let tags = tags.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_tag(tag_id).await {
                    Ok(()) => {
                        if let Some(mut current) = (*tags).clone() {
                            current.retain(|tag| tag.id != tag_id);
                            session::cache_tags(&current);
                            tags.set(Some(current));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <section class="space-y-4">
            <h1 class="text-2xl font-bold">{"Tags"}</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <form class="flex gap-x-2 max-w-md" onsubmit={on_create}>
                <input
                    class="input input-bordered flex-grow"
                    placeholder="New tag name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
                <input
                    class="input input-bordered w-28"
                    placeholder="Parent id"
                    value={(*parent).clone()}
                    oninput={on_parent_input}
                />
                <button class="btn btn-primary" type="submit">{"Add"}</button>
            </form>
            {
                match &*tags {
                    None => html! { <crate::components::Loading /> },
                    Some(items) => html! {
                        <div class="flex flex-wrap gap-2">
                            {
                                items.iter().map(|tag| {
                                    let on_remove = {
                                        let remove_tag = remove_tag.clone();
                                        let tag_id = tag.id;
                                        Callback::from(move |_: MouseEvent| remove_tag.emit(tag_id))
                                    };
                                    html! {
                                        <span key={tag.id} class="badge badge-lg badge-outline gap-x-1">
                                            { &tag.name }
                                            <button class="text-error" onclick={on_remove}>{"×"}</button>
                                        </span>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    },
                }
            }
        </section>
    }
}
