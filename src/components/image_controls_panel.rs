//! Image Controls Panel Component
//!
//! Per-image actions: render onto the matrix at an offset, or delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_api_config;

/// Display/Delete buttons with x/y offset inputs
///
/// # Arguments
/// * `name` - Image the actions apply to
/// * `deleting` - Disables both buttons when true
/// * `on_delete` - Called on Delete click; the parent owns the network call
#[component]
pub fn ImageControlsPanel(
    name: String,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let config = use_api_config();

    // Raw text, forwarded unvalidated
    let (x, set_x) = signal(String::from("0"));
    let (y, set_y) = signal(String::from("0"));

    let display = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let config = config.clone();
        let name = name.clone();
        let (x, y) = (x.get_untracked(), y.get_untracked());
        spawn_local(async move {
            if let Err(e) = commands::display_image(&config, &name, &x, &y).await {
                web_sys::console::error_1(&format!("[Controls] Display {} at ({}, {}) failed: {}", name, x, y, e).into());
            }
        });
    };

    view! {
        <div class="imgcontrols">
            <div>
                <button type="button" on:click=display disabled=move || deleting.get()>
                    "Display"
                </button>
                "x: "
                <input
                    size="4"
                    prop:value=move || x.get()
                    on:input=move |ev| set_x.set(event_target_value(&ev))
                />
                "y: "
                <input
                    size="4"
                    prop:value=move || y.get()
                    on:input=move |ev| set_y.set(event_target_value(&ev))
                />
            </div>
            <div>
                <button
                    type="button"
                    disabled=move || deleting.get()
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_delete.run(());
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
