use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch_main} />
        </BrowserRouter>
    }
}
