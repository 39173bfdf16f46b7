use crate::api::ApiClient;
use crate::routes::AdminRoute;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Admin landing page: headline counts and jump-off links.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let article_count = use_state(|| None::<usize>);
    let account_count = use_state(|| None::<usize>);
    let tag_count = use_state(|| None::<usize>);

    {
        let article_count = article_count.clone();
        let account_count = account_count.clone();
        let tag_count = tag_count.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ApiClient::shared();
                if let Ok(articles) = client.articles(None).await {
                    article_count.set(Some(articles.len()));
                }
                if let Ok(accounts) = client.accounts("").await {
                    account_count.set(Some(accounts.len()));
                }
                if let Ok(tags) = client.tags().await {
                    tag_count.set(Some(tags.len()));
                }
            });
            || ()
        });
    }

    let stat = |label: &str, value: &Option<usize>| {
        html! {
            <div class="stat">
                <div class="stat-title">{label.to_string()}</div>
                <div class="stat-value">
                    { value.map_or_else(|| "—".to_string(), |count| count.to_string()) }
                </div>
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>

            <div class="stats shadow w-full">
                { stat("Articles", &article_count) }
                { stat("Accounts", &account_count) }
                { stat("Tags", &tag_count) }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Articles"}</h2>
                        <p>{"Publish, edit and retire articles."}</p>
                        <div class="card-actions justify-end">
                            <Link<AdminRoute> to={AdminRoute::Articles} classes="btn btn-primary">
                                {"Manage"}
                            </Link<AdminRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Accounts"}</h2>
                        <p>{"Review and remove reader accounts."}</p>
                        <div class="card-actions justify-end">
                            <Link<AdminRoute> to={AdminRoute::Accounts} classes="btn btn-primary">
                                {"Manage"}
                            </Link<AdminRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"Tags"}</h2>
                        <p>{"Curate the tag taxonomy."}</p>
                        <div class="card-actions justify-end">
                            <Link<AdminRoute> to={AdminRoute::Tags} classes="btn btn-primary">
                                {"Manage"}
                            </Link<AdminRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"New article"}</h2>
                        <p>{"Start a fresh draft."}</p>
                        <div class="card-actions justify-end">
                            <Link<AdminRoute> to={AdminRoute::CreateArticle} classes="btn btn-secondary">
                                {"Write"}
                            </Link<AdminRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
