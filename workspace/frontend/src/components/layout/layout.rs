use yew::prelude::*;

use super::footer::Footer;
use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen">
            <Header />
            <main class="flex-1 w-full max-w-6xl mx-auto px-4 pt-20 pb-8">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
