use composer::Dataset;
use yew::prelude::*;

use crate::dataset::fetch_assets;

/// Dataset fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Loads the asset dataset once per mount.
///
/// There is no refetch and no retry; a component that needs a fresh load
/// remounts. A response arriving after unmount is discarded by the effect
/// cleanup convention.
#[hook]
pub fn use_dataset() -> UseStateHandle<FetchState<Dataset>> {
    let fetch_state = use_state(|| FetchState::Loading);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_assets().await {
                    Ok(records) => {
                        fetch_state.set(FetchState::Success(Dataset::new(records)));
                    }
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
            || ()
        });
    }

    fetch_state
}
