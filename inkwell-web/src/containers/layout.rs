use crate::containers::header::Header;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header />
            <div class="min-h-screen bg-base-100 flex flex-col">
                <main class="flex-grow p-4">
                    { props.children.clone() }
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"© 2026 Inkwell · Powered by Rust and Yew"}</p>
                    </div>
                </footer>
            </div>
        </>
    }
}
