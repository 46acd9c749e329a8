use yew::prelude::*;

use crate::components::composer::PortfolioComposer;
use crate::components::menu_tabs::{MenuKind, MenuTabs};

/// Main page: the menu tabs and the content for the selected section.
///
/// The composer is mounted per section, so the dataset is fetched once per
/// menu context; the crypto section performs no fetch at all.
#[function_component(Home)]
pub fn home() -> Html {
    let selected_menu = use_state(|| MenuKind::Stocks);

    let on_select = {
        let selected_menu = selected_menu.clone();
        Callback::from(move |kind: MenuKind| {
            log::debug!("Selected menu: {}", kind.label());
            selected_menu.set(kind);
        })
    };

    html! {
        <div>
            <MenuTabs selected={*selected_menu} on_select={on_select} />
            { match *selected_menu {
                MenuKind::Stocks => html! { <PortfolioComposer /> },
                MenuKind::Crypto => html! { <p class="py-8">{"Crypto quant is coming soon."}</p> },
            }}
        </div>
    }
}
