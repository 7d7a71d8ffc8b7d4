//! Gallery View Component
//!
//! Owns the gallery state: initial load, refresh after new images are
//! stored, removal after confirmed deletes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ImageItem, UploadPanel};
use crate::context::{use_api_config, ApiConfig};
use crate::store::{dispatch, GalleryEffect, GalleryEvent, GalleryState, GalleryStateStoreFields, GalleryStore, LoadStatus};

/// Dispatch an event and run whatever effect the transition asks for.
fn run_event(store: GalleryStore, config: ApiConfig, event: GalleryEvent) {
    let Some(GalleryEffect::FetchList { generation }) = dispatch(store, event) else {
        return;
    };
    web_sys::console::log_1(&format!("[Gallery] Loading images, generation={}", generation).into());
    spawn_local(async move {
        let event = match commands::list_images(&config).await {
            Ok(items) => {
                web_sys::console::log_1(&format!("[Gallery] Loaded {} images", items.len()).into());
                GalleryEvent::ListLoaded { generation, items }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[Gallery] Error loading images: {}", e).into());
                GalleryEvent::ListFailed { generation, message: e.to_string() }
            }
        };
        run_event(store, config, event);
    });
}

#[component]
pub fn GalleryView() -> impl IntoView {
    let config = use_api_config();
    let store: GalleryStore = Store::new(GalleryState::default());

    // Load once on mount
    Effect::new({
        let config = config.clone();
        move |_| run_event(store, config.clone(), GalleryEvent::ListRequested)
    });

    let on_upload_complete = {
        let config = config.clone();
        Callback::new(move |_: ()| run_event(store, config.clone(), GalleryEvent::UploadCompleted))
    };
    let on_item_deleted = Callback::new(move |name: String| {
        run_event(store, config.clone(), GalleryEvent::ItemDeleteConfirmed(name))
    });

    // Deletes must not rebuild the whole gallery, only status changes do
    let status = Memo::new(move |_| store.status().get());

    view! {
        <div class="gallery">
            {move || match status.get() {
                LoadStatus::Error(message) => view! {
                    <div class="error">"Error: " {message}</div>
                }.into_any(),
                LoadStatus::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                LoadStatus::Loaded => view! {
                    <UploadPanel on_upload_complete=on_upload_complete />
                    <div class="images">
                        <For
                            each=move || store.items().get()
                            key=|record| record.name.clone()
                            children=move |record| view! {
                                <ImageItem name=record.name on_deleted=on_item_deleted />
                            }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
