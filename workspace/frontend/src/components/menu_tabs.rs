use yew::prelude::*;

/// Top-level content sections of the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Stocks,
    Crypto,
}

impl MenuKind {
    pub fn label(&self) -> &'static str {
        match self {
            MenuKind::Stocks => "Stock Quant",
            MenuKind::Crypto => "Crypto Quant",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: MenuKind,
    pub on_select: Callback<MenuKind>,
}

#[function_component(MenuTabs)]
pub fn menu_tabs(props: &Props) -> Html {
    html! {
        <div class="flex justify-start w-full gap-2 mb-4 text-xl font-extrabold">
            { for [MenuKind::Stocks, MenuKind::Crypto].into_iter().map(|kind| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(kind))
                };
                let color = if props.selected == kind {
                    "text-base-content"
                } else {
                    "text-gray-500"
                };

                html! {
                    <button
                        class={classes!("text-start", "py-2", "rounded", color)}
                        onclick={on_click}
                    >
                        { kind.label() }
                    </button>
                }
            })}
        </div>
    }
}
