use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::notice::NoticeContext;
use crate::Route;

/// Fixed top header. Everything except the brand link is an unimplemented
/// stub that raises the transient notice.
#[function_component(Header)]
pub fn header() -> Html {
    let notice = use_context::<NoticeContext>().unwrap();

    let stub = |feature: &'static str| {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| notice.coming_soon(feature))
    };

    html! {
        <header class="fixed top-0 left-0 w-full z-50 h-16 flex justify-center items-center bg-base-100 shadow-sm">
            <div class="px-4 mx-auto flex justify-between items-center w-full">
                <div class="flex items-center">
                    <Link<Route> to={Route::Home} classes="flex items-center gap-2 text-xl font-extrabold">
                        {"Quantfolio"}
                    </Link<Route>>

                    <nav class="hidden md:flex gap-10 font-medium items-center px-10">
                        <Link<Route> to={Route::Home} classes="cursor-pointer hover:text-gray-500">
                            {"Foundry"}
                        </Link<Route>>
                        <span class="cursor-pointer hover:text-gray-500" onclick={stub("Support")}>
                            {"Support"}
                        </span>
                        <span class="cursor-pointer hover:text-gray-500" onclick={stub("Pricing")}>
                            {"Pricing"}
                        </span>
                    </nav>
                </div>

                <div class="hidden md:block">
                    <button
                        class="btn btn-sm font-bold"
                        onclick={stub("Sign-in")}
                    >
                        {"Sign In"}
                    </button>
                </div>

                <button class="md:hidden" onclick={stub("The mobile menu")}>
                    <i class="fas fa-bars"></i>
                </button>
            </div>
        </header>
    }
}
