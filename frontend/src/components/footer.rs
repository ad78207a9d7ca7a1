use yew::prelude::*;
use crate::config::Config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gradient-to-r from-slate-800 to-blue-600 text-white mt-auto">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col sm:flex-row justify-between items-center space-y-2 sm:space-y-0">
                    <p class="text-blue-100 text-sm">
                        {format!("© {}. Informational content only, not a medical diagnosis.", Config::APP_NAME)}
                    </p>
                    <div class="text-xs text-blue-200 font-mono">
                        {"v"}{env!("CARGO_PKG_VERSION")}
                    </div>
                </div>
            </div>
        </footer>
    }
}
