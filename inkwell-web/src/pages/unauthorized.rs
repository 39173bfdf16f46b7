use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(UnauthorizedPage)]
pub fn unauthorized_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] gap-y-4">
            <h1 class="text-3xl font-extrabold">{"Unauthorized"}</h1>
            <p class="text-base-content/70">
                {"Your account does not have access to this page."}
            </p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Back to articles"}
            </Link<MainRoute>>
        </div>
    }
}
