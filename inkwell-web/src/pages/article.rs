use crate::api::ApiClient;
use crate::auth::session;
use crate::routes::MainRoute;
use shared::models::{Article, CommentRequest, VoteState};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ArticlePageProps {
    pub article_id: String,
}

#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    let article = use_state(|| None::<Article>);
    let error = use_state(|| None::<String>);
    let comment_draft = use_state(String::new);
    let editing = use_state(|| None::<(i64, String)>);
    let navigator = use_navigator();

    let article_id = Uuid::parse_str(&props.article_id).ok();
    let signed_in = session::is_signed_in();
    let reader_id = session::signed_in_user_id();

    {
        let article = article.clone();
        let error = error.clone();
        use_effect_with(article_id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    match ApiClient::shared().article(id).await {
                        Ok(item) => article.set(Some(item)),
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            || ()
        });
    }

    let Some(article_id) = article_id else {
        return html! { <super::NotFoundPage /> };
    };

    let on_vote = {
        let article_handle = article.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if !signed_in {
                // Voting is an account feature; send visitors to sign up.
                if let Some(ref nav) = navigator {
                    nav.push(&MainRoute::Register);
                }
                return;
            }
            let article_handle = article_handle.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().vote(article_id).await {
                    Ok(receipt) => {
                        if let Some(mut current) = (*article_handle).clone() {
                            match receipt.state {
                                VoteState::Add => current.votes.push(receipt.vote()),
                                VoteState::Remove => {
                                    current.votes.retain(|vote| vote.user_id != receipt.user_id);
                                }
                            }
                            article_handle.set(Some(current));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_comment_input = {
        let comment_draft = comment_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                comment_draft.set(area.value());
            }
        })
    };

    let on_comment_submit = {
        let article_handle = article.clone();
        let comment_draft = comment_draft.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let body = (*comment_draft).trim().to_string();
            if body.is_empty() {
                return;
            }
            let article_handle = article_handle.clone();
            let comment_draft = comment_draft.clone();
            let error = error.clone();
            spawn_local(async move {
                let request = CommentRequest { comment: body };
                match ApiClient::shared().create_comment(article_id, &request).await {
                    Ok(comment) => {
                        if let Some(mut current) = (*article_handle).clone() {
                            current.comments.push(comment);
                            article_handle.set(Some(current));
                        }
                        comment_draft.set(String::new());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let save_edit = {
        let article_handle = article.clone();
        let editing = editing.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some((comment_id, body)) = (*editing).clone() else {
                return;
            };
            let body = body.trim().to_string();
            if body.is_empty() {
                return;
            }
            let article_handle = article_handle.clone();
            let editing = editing.clone();
            let error = error.clone();
            spawn_local(async move {
                let request = CommentRequest { comment: body };
                match ApiClient::shared().update_comment(comment_id, &request).await {
                    Ok(updated) => {
                        if let Some(mut current) = (*article_handle).clone() {
                            if let Some(slot) = current
                                .comments
                                .iter_mut()
                                .find(|comment| comment.id == comment_id)
                            {
                                *slot = updated;
                            }
                            article_handle.set(Some(current));
                        }
                        editing.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let delete_comment = {
        let article_handle = article.clone();
        let error = error.clone();
        Callback::from(move |comment_id: i64| {
            let article_handle = article_handle.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_comment(comment_id).await {
                    Ok(()) => {
                        if let Some(mut current) = (*article_handle).clone() {
                            current.comments.retain(|comment| comment.id != comment_id);
                            article_handle.set(Some(current));
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let Some(current) = (*article).clone() else {
        return html! {
            <>
                if let Some(message) = &*error {
                    <div class="alert alert-error"><span>{message.clone()}</span></div>
                }
                <crate::components::Loading />
            </>
        };
    };

    let voted = reader_id.is_some_and(|id| current.voted_by(id));

    html! {
        <article class="max-w-3xl mx-auto space-y-6">
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <img class="rounded-lg w-full" src={current.article_img_url.clone()} alt={current.title.clone()} />
            <h1 class="text-4xl font-extrabold">{ &current.title }</h1>
            <div class="flex items-center gap-x-3 text-sm text-base-content/60">
                <span>{ current.created_at.format_long() }</span>
                <div class="flex flex-wrap gap-2">
                    {
                        current.tags.iter().map(|tag| html! {
                            <Link<MainRoute>
                                key={tag.id}
                                to={MainRoute::TagView { tag_id: tag.id.to_string() }}
                                classes="badge badge-outline"
                            >
                                { &tag.name }
                            </Link<MainRoute>>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="prose max-w-none">
                { Html::from_html_unchecked(AttrValue::from(current.content.clone())) }
            </div>
            <div class="flex items-center gap-x-2">
                <button class="btn btn-ghost btn-sm" onclick={on_vote}>
                    { if voted { "♥" } else { "♡" } }
                    { format!(" {}", current.votes.len()) }
                </button>
            </div>

            <section class="space-y-4">
                <h2 class="text-2xl font-bold">{ format!("Comments ({})", current.comments.len()) }</h2>
                {
                    if signed_in {
                        html! {
                            <form class="space-y-2" onsubmit={on_comment_submit}>
                                <textarea
                                    class="textarea textarea-bordered w-full"
                                    placeholder="Share your thoughts"
                                    value={(*comment_draft).clone()}
                                    oninput={on_comment_input}
                                />
                                <button class="btn btn-primary btn-sm" type="submit">{"Comment"}</button>
                            </form>
                        }
                    } else {
                        html! {
                            <p class="text-base-content/70">
                                <Link<MainRoute> to={MainRoute::Login} classes="link">{"Sign in"}</Link<MainRoute>>
                                {" to join the discussion."}
                            </p>
                        }
                    }
                }
                {
                    current.comments.iter().map(|comment| {
                        let own = reader_id == Some(comment.user.id);
                        let being_edited = (*editing)
                            .as_ref()
                            .is_some_and(|(id, _)| *id == comment.id);
                        let on_delete = {
                            let delete_comment = delete_comment.clone();
                            let comment_id = comment.id;
                            Callback::from(move |_: MouseEvent| delete_comment.emit(comment_id))
                        };
                        let on_edit = {
                            let editing = editing.clone();
                            let comment_id = comment.id;
                            let body = comment.comment.clone();
                            Callback::from(move |_: MouseEvent| {
                                editing.set(Some((comment_id, body.clone())));
                            })
                        };
                        let on_cancel = {
                            let editing = editing.clone();
                            Callback::from(move |_: MouseEvent| editing.set(None))
                        };
                        let on_edit_input = {
                            let editing = editing.clone();
                            let comment_id = comment.id;
                            Callback::from(move |event: InputEvent| {
                                if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                                    editing.set(Some((comment_id, area.value())));
                                }
                            })
                        };
                        html! {
                            <div key={comment.id} class="border-b border-base-300 pb-3 space-y-1">
                                <div class="flex items-center justify-between">
                                    <span class="font-semibold">{ comment.user.full_name() }</span>
                                    <span class="text-xs text-base-content/60">
                                        { comment.created_at.format_long() }
                                    </span>
                                </div>
                                {
                                    if being_edited {
                                        let value = (*editing)
                                            .as_ref()
                                            .map(|(_, body)| body.clone())
                                            .unwrap_or_default();
                                        html! {
                                            <div class="space-y-2">
                                                <textarea
                                                    class="textarea textarea-bordered w-full"
                                                    {value}
                                                    oninput={on_edit_input}
                                                />
                                                <button class="btn btn-primary btn-xs" onclick={save_edit.clone()}>
                                                    {"Save"}
                                                </button>
                                                <button class="btn btn-ghost btn-xs" onclick={on_cancel}>
                                                    {"Cancel"}
                                                </button>
                                            </div>
                                        }
                                    } else {
                                        html! { <p>{ &comment.comment }</p> }
                                    }
                                }
                                if own && !being_edited {
                                    <div class="flex gap-x-1">
                                        <button class="btn btn-ghost btn-xs" onclick={on_edit}>
                                            {"Edit"}
                                        </button>
                                        <button class="btn btn-ghost btn-xs" onclick={on_delete}>
                                            {"Delete"}
                                        </button>
                                    </div>
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </section>
        </article>
    }
}
