//! Gallery State Store
//!
//! Immutable snapshots of the gallery, advanced by a pure reducer and held
//! in a `reactive_stores::Store` for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::ImageRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Error(String),
}

/// The client's view of the device's image storage
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GalleryState {
    pub status: LoadStatus,
    /// Server order, unique by name. Never contains a record the server did not list.
    pub items: Vec<ImageRecord>,
    /// Sequence number of the latest list request
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryEvent {
    ListRequested,
    ListLoaded { generation: u64, items: Vec<ImageRecord> },
    ListFailed { generation: u64, message: String },
    ItemDeleteConfirmed(String),
    /// A new image was stored (upload or fetch-by-URL)
    UploadCompleted,
}

/// Side effect requested by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEffect {
    FetchList { generation: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: GalleryState,
    pub effect: Option<GalleryEffect>,
}

impl Transition {
    fn settle(state: GalleryState) -> Self {
        Self { state, effect: None }
    }
}

pub fn reduce(state: GalleryState, event: GalleryEvent) -> Transition {
    match event {
        GalleryEvent::ListRequested | GalleryEvent::UploadCompleted => {
            let generation = state.generation + 1;
            Transition {
                state: GalleryState { status: LoadStatus::Loading, generation, ..state },
                effect: Some(GalleryEffect::FetchList { generation }),
            }
        }
        // Responses to superseded requests are dropped
        GalleryEvent::ListLoaded { generation, .. } | GalleryEvent::ListFailed { generation, .. }
            if generation != state.generation =>
        {
            Transition::settle(state)
        }
        GalleryEvent::ListLoaded { items, .. } => {
            Transition::settle(GalleryState { status: LoadStatus::Loaded, items, ..state })
        }
        GalleryEvent::ListFailed { message, .. } => {
            Transition::settle(GalleryState { status: LoadStatus::Error(message), ..state })
        }
        GalleryEvent::ItemDeleteConfirmed(name) => {
            let mut state = state;
            state.items.retain(|record| record.name != name);
            Transition::settle(state)
        }
    }
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Apply an event to the store, returning the effect the caller must run
pub fn dispatch(store: GalleryStore, event: GalleryEvent) -> Option<GalleryEffect> {
    let current = store.try_get_untracked()?;
    let Transition { state, effect } = reduce(current, event);
    store.set(state);
    effect
}
