//! LED Web Frontend App
//!
//! Root component: resolves the server location and hosts the gallery.

use leptos::prelude::*;

use crate::components::GalleryView;
use crate::context::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Companion server: {:?}", config.base_url()).into());

    // Provide context to all children
    provide_context(config);

    view! {
        <main class="ledweb">
            <h1>"LED Matrix"</h1>
            <GalleryView />
        </main>
    }
}
