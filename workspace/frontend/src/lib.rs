use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use components::chat::ChatPage;
use components::layout::Header;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="app min-h-screen flex flex-col bg-base-200">
            <Header />
            <main class="app-main flex-1 flex flex-col">
                <ChatPage />
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== FinChat Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Query URL: {}", settings.chat.query_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
