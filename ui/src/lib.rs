use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use tellus_mason::ApiConfig;

mod api;
mod components;

use components::rooms::Reservations;

#[component]
pub fn App() -> impl IntoView {
    // Served by the reservation API itself
    provide_context(ApiConfig::same_origin());

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                <div class="flex-1 overflow-y-auto">
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=Reservations/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(App);
}
