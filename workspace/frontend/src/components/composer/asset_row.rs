use composer::{RowId, SelectionRow};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Zero-based display position. Ids are stable for a row's lifetime;
    /// positions shift as rows above are removed.
    pub position: usize,
    pub row: SelectionRow,
    pub categories: Vec<String>,
    /// Instruments offered for the row's current category; empty when no
    /// category is selected.
    pub instruments: Vec<String>,
    pub on_category_change: Callback<(RowId, Option<String>)>,
    pub on_asset_change: Callback<(RowId, Option<String>)>,
    pub on_weight_input: Callback<(RowId, String)>,
    pub on_remove: Callback<RowId>,
}

fn selected_value(e: &Event) -> Option<String> {
    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[function_component(AssetRow)]
pub fn asset_row(props: &Props) -> Html {
    let row_id = props.row.id;

    let on_category = {
        let on_category_change = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            on_category_change.emit((row_id, selected_value(&e)));
        })
    };

    let on_asset = {
        let on_asset_change = props.on_asset_change.clone();
        Callback::from(move |e: Event| {
            on_asset_change.emit((row_id, selected_value(&e)));
        })
    };

    let on_weight = {
        let on_weight_input = props.on_weight_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_weight_input.emit((row_id, value));
        })
    };

    let on_remove = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_| on_remove.emit(row_id))
    };

    html! {
        <div class="flex flex-col">
            <div class="text-start pb-2">
                { format!("Asset {:02}", props.position + 1) }
            </div>

            <div class="flex justify-between gap-4">
                <div class="form-control flex-1">
                    <label class="label">
                        <span class="label-text">{"Category"}</span>
                    </label>
                    <select class="select select-bordered w-full" onchange={on_category}>
                        <option value="" selected={props.row.category.is_none()}>
                            {"Select a category"}
                        </option>
                        { for props.categories.iter().map(|name| html! {
                            <option
                                value={name.clone()}
                                selected={props.row.category.as_deref() == Some(name.as_str())}
                            >
                                {name}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-control flex-1">
                    <label class="label">
                        <span class="label-text">{"Asset"}</span>
                    </label>
                    <select
                        class="select select-bordered w-full"
                        disabled={props.row.category.is_none()}
                        onchange={on_asset}
                    >
                        <option value="" selected={props.row.asset_name.is_none()}>
                            {"Select an asset"}
                        </option>
                        { for props.instruments.iter().map(|name| html! {
                            <option
                                value={name.clone()}
                                selected={props.row.asset_name.as_deref() == Some(name.as_str())}
                            >
                                {name}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-control flex-1">
                    <label class="label">
                        <span class="label-text">{"Weight"}</span>
                    </label>
                    <div class="relative">
                        <input
                            type="number"
                            min="0"
                            max="100"
                            step="1"
                            class="input input-bordered w-full text-center"
                            value={props.row.weight.clone()}
                            oninput={on_weight}
                        />
                        <span class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500 pointer-events-none">
                            {"%"}
                        </span>
                    </div>
                    <div class="text-xs text-gray-500 pt-2">
                        {"Enter a value from 0 to 100."}
                    </div>
                </div>
            </div>

            <div class="mr-3 text-end">
                <button class="btn btn-ghost btn-xs text-error" onclick={on_remove}>
                    {"Remove"}
                </button>
            </div>
        </div>
    }
}
