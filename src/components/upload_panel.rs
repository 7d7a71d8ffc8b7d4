//! Upload Panel Component
//!
//! Device-wide actions: clear the matrix, upload a local image, or have the
//! server fetch one from a URL. All best-effort; failures only go to the console.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_api_config;
use crate::error::ApiError;

/// Formats the server stores
const ACCEPTED_FORMATS: &str = ".png,image/png";

/// First file of the selection; later ones are ignored.
fn first_selected(input: Option<web_sys::HtmlInputElement>) -> Result<web_sys::File, ApiError> {
    input
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
        .ok_or(ApiError::NoFileSelected)
}

#[component]
pub fn UploadPanel(
    /// Called after a new image was stored on the server
    #[prop(into)] on_upload_complete: Callback<()>,
) -> impl IntoView {
    let config = use_api_config();
    let file_input = NodeRef::<html::Input>::new();
    let (img_url, set_img_url) = signal(String::new());

    let clear = {
        let config = config.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            let config = config.clone();
            spawn_local(async move {
                if let Err(e) = commands::clear_display(&config).await {
                    web_sys::console::error_1(&format!("[Upload] Clear failed: {}", e).into());
                }
            });
        }
    };

    let upload = {
        let config = config.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            let file = match first_selected(file_input.get_untracked()) {
                Ok(file) => file,
                Err(e) => {
                    web_sys::console::warn_1(&format!("[Upload] Nothing to upload: {}", e).into());
                    return;
                }
            };
            let config = config.clone();
            spawn_local(async move {
                let filename = file.name();
                match commands::upload_image(&config, file).await {
                    Ok(()) => {
                        web_sys::console::log_1(&format!("[Upload] Stored {}", filename).into());
                        on_upload_complete.try_run(());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[Upload] Upload of {} failed: {}", filename, e).into());
                    }
                }
            });
        }
    };

    let fetch = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let url = img_url.get_untracked().trim().to_string();
        if url.is_empty() {
            web_sys::console::warn_1(&"[Upload] No image URL to fetch".into());
            return;
        }
        let config = config.clone();
        spawn_local(async move {
            match commands::download_image(&config, &url).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[Upload] Fetched {}", url).into());
                    on_upload_complete.try_run(());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Upload] Fetch of {} failed: {}", url, e).into());
                }
            }
        });
    };

    view! {
        <div class="controls">
            <div>
                <button type="button" on:click=clear>"Clear"</button>
                <input type="file" accept=ACCEPTED_FORMATS node_ref=file_input />
                <button type="button" on:click=upload>"Upload"</button>
            </div>
            <form class="fetch-form" on:submit=fetch>
                "Image URL: "
                <input
                    type="text"
                    prop:value=move || img_url.get()
                    on:input=move |ev| set_img_url.set(event_target_value(&ev))
                />
                <button type="submit">"Fetch"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_without_file_is_rejected() {
        assert!(matches!(first_selected(None), Err(ApiError::NoFileSelected)));
    }
}
