use yew::prelude::*;

use crate::common::notice::NoticeContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_reset: Callback<()>,
}

/// Right-hand rail with the primary actions. Save, backtest and export are
/// unimplemented stubs: each one only raises the transient notice.
#[function_component(ActionRail)]
pub fn action_rail(props: &Props) -> Html {
    let notice = use_context::<NoticeContext>().unwrap();

    let stub = |feature: &'static str| {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("{} requested (not implemented)", feature);
            notice.coming_soon(feature);
        })
    };

    let on_reset = {
        let notice = notice.clone();
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| {
            notice.clear.emit(());
            on_reset.emit(());
        })
    };

    html! {
        <div class="sticky top-20 flex flex-col gap-4 w-40">
            <button class="btn btn-success font-bold" onclick={stub("Saving")}>
                {"Save"}
            </button>
            <button class="btn font-bold" onclick={stub("Backtesting")}>
                {"Backtest"}
            </button>
            <button class="btn font-bold" onclick={stub("Portfolio export")}>
                {"Export"}
            </button>
            <button class="btn btn-outline btn-sm" onclick={on_reset}>
                {"Reset settings"}
            </button>
        </div>
    }
}
