//! Image Item Component
//!
//! One stored image: preview plus controls, driving its own delete lifecycle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ImageControlsPanel;
use crate::context::use_api_config;
use crate::item_phase::{ItemEffect, ItemEvent, ItemPhase};

/// Advance the phase signal. `None` once the component is gone.
fn advance(phase: RwSignal<ItemPhase>, event: ItemEvent) -> Option<ItemEffect> {
    let current = phase.try_get_untracked()?;
    let (next, effect) = current.apply(event);
    let _ = phase.try_set(next);
    effect
}

#[component]
pub fn ImageItem(
    name: String,
    /// Receives `name` after the server confirmed the delete
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let config = use_api_config();
    let phase = RwSignal::new(ItemPhase::Present);
    let deleting = Signal::derive(move || phase.get().controls_disabled());

    let src = config.image_url(&name);
    let alt = name.clone();

    let on_delete = {
        let name = name.clone();
        Callback::new(move |_: ()| {
            if advance(phase, ItemEvent::DeleteRequested) != Some(ItemEffect::SendDelete) {
                return;
            }
            let config = config.clone();
            let name = name.clone();
            spawn_local(async move {
                match commands::delete_image(&config, &name).await {
                    Ok(()) => {
                        web_sys::console::log_1(&format!("[ImageItem] Deleted {}", name).into());
                        advance(phase, ItemEvent::DeleteConfirmed);
                        on_deleted.try_run(name);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[ImageItem] Failed to delete {}: {}", name, e).into());
                        advance(phase, ItemEvent::DeleteFailed(e.to_string()));
                    }
                }
            });
        })
    };

    view! {
        <div
            class="image"
            class:deleting=move || phase.get() == ItemPhase::DeletePending
            class:delete-failed=move || matches!(phase.get(), ItemPhase::DeleteFailed(_))
        >
            <img src=src alt=alt />
            <ImageControlsPanel name=name deleting=deleting on_delete=on_delete />
        </div>
    }
}
