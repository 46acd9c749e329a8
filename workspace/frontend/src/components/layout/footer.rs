use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="text-start w-full text-gray-500 py-12 px-4">
            <div class="w-full">
                <div class="text-start mb-8">
                    <div class="text-xl font-extrabold pb-4">{"Quantfolio"}</div>
                    <div class="text-xs">
                        <p>{"Quantfolio Labs"}</p>
                        <p>
                            {"Business inquiries: "}
                            <a href="mailto:hello@quantfolio.dev" class="underline hover:text-gray-100">
                                {"hello@quantfolio.dev"}
                            </a>
                        </p>
                    </div>
                </div>

                <div class="flex space-x-4 mb-8">
                    <a href="#" class="hover:text-gray-100" aria-label="Instagram">
                        <i class="fab fa-instagram"></i>
                    </a>
                    <a href="#" class="hover:text-gray-100" aria-label="YouTube">
                        <i class="fab fa-youtube"></i>
                    </a>
                    <a href="#" class="hover:text-gray-100" aria-label="X">
                        <i class="fab fa-x-twitter"></i>
                    </a>
                </div>

                <div class="flex flex-col md:flex-row justify-between items-start md:items-center text-xs border-t border-gray-700 pt-6">
                    <div class="max-w-lg">
                        <p>{"© 2026 Quantfolio Labs. All rights reserved."}</p>
                        <p class="mt-2 text-gray-400">
                            {"The information provided here is for reference only and does not "}
                            {"constitute investment advice."}
                        </p>
                    </div>
                    <div class="flex space-x-6 text-xs">
                        <button class="hover:cursor-pointer">{"Privacy Policy"}</button>
                        <button class="hover:cursor-pointer">{"Terms of Service"}</button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
