use composer::{AssetIndex, PortfolioDraft, RowId};
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::hooks::{use_dataset, FetchState};

use super::actions::ActionRail;
use super::asset_row::AssetRow;

/// The portfolio composition form: an editable list of selection rows bound
/// to a [`PortfolioDraft`], with option lists derived from the dataset
/// loaded on mount.
#[function_component(PortfolioComposer)]
pub fn portfolio_composer() -> Html {
    log::trace!("PortfolioComposer rendering");
    let fetch_state = use_dataset();
    let draft = use_state(PortfolioDraft::new);

    // The option lists are recomputed only when the dataset handle itself is
    // replaced (identity, not content), never on a plain re-render.
    let dataset = fetch_state.data().cloned();
    let index = use_memo(dataset, |dataset| match dataset {
        Some(dataset) => AssetIndex::build(dataset.records()),
        None => AssetIndex::default(),
    });

    let on_add_row = {
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut next = (*draft).clone();
            let id = next.add_row();
            log::debug!("Added row {}", id);
            draft.set(next);
        })
    };

    let on_remove_row = {
        let draft = draft.clone();
        Callback::from(move |id: RowId| {
            log::debug!("Removing row {}", id);
            let mut next = (*draft).clone();
            next.remove_row(id);
            draft.set(next);
        })
    };

    let on_category_change = {
        let draft = draft.clone();
        Callback::from(move |(id, category): (RowId, Option<String>)| {
            log::debug!("Row {} category -> {:?}", id, category);
            let mut next = (*draft).clone();
            next.set_category(id, category);
            draft.set(next);
        })
    };

    let on_asset_change = {
        let draft = draft.clone();
        Callback::from(move |(id, asset): (RowId, Option<String>)| {
            log::debug!("Row {} asset -> {:?}", id, asset);
            let mut next = (*draft).clone();
            next.set_asset(id, asset);
            draft.set(next);
        })
    };

    let on_weight_input = {
        let draft = draft.clone();
        Callback::from(move |(id, raw): (RowId, String)| {
            let mut next = (*draft).clone();
            next.set_weight(id, &raw);
            draft.set(next);
        })
    };

    let on_reset = {
        let draft = draft.clone();
        Callback::from(move |_| {
            log::info!("Resetting the composer form");
            let mut next = (*draft).clone();
            next.reset();
            draft.set(next);
        })
    };

    match &*fetch_state {
        FetchState::Loading => html! { <LoadingSpinner /> },
        FetchState::Error(message) => html! { <ErrorDisplay message={message.clone()} /> },
        FetchState::Success(dataset) if dataset.is_empty() => {
            html! { <p class="py-8">{"No asset data available."}</p> }
        }
        FetchState::Success(_) => html! {
            <>
                <h2 class="w-full flex justify-start underline decoration-2 text-lg font-bold pb-5">
                    {"Asset Allocation"}
                </h2>

                <div class="flex justify-between items-start">
                    <div class="flex-1 pr-6">
                        <div class="text-start font-bold pb-3">
                            <span class="pr-1">{"Add asset classes"}</span>
                            <span class="text-green-400">{"[required]"}</span>
                        </div>

                        { for draft.rows().iter().enumerate().map(|(position, row)| {
                            let instruments = row
                                .category
                                .as_deref()
                                .map(|category| index.assets_in(category).to_vec())
                                .unwrap_or_default();

                            html! {
                                <AssetRow
                                    key={row.id}
                                    position={position}
                                    row={row.clone()}
                                    categories={index.categories().to_vec()}
                                    instruments={instruments}
                                    on_category_change={on_category_change.clone()}
                                    on_asset_change={on_asset_change.clone()}
                                    on_weight_input={on_weight_input.clone()}
                                    on_remove={on_remove_row.clone()}
                                />
                            }
                        })}

                        <button class="btn btn-outline btn-sm mt-2" onclick={on_add_row}>
                            {"Add asset class"}
                        </button>
                    </div>

                    <ActionRail on_reset={on_reset} />
                </div>
            </>
        },
    }
}
