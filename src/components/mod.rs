//! UI Components
//!
//! Leptos components of the control panel, leaf-first.

mod image_controls_panel;
mod upload_panel;
mod image_item;
mod gallery_view;

pub use image_controls_panel::ImageControlsPanel;
pub use upload_panel::UploadPanel;
pub use image_item::ImageItem;
pub use gallery_view::GalleryView;
