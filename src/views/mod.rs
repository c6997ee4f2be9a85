//! View models and the pure functions that derive them from fetched rows.
//!
//! Each view is rebuilt from scratch on every request: fetch, fold, render.
//! Nothing here touches the network.

pub mod eta;
pub mod fold;
pub mod incidents;
pub mod jobs;
pub mod map;
pub mod overview;
pub mod rescued;
pub mod resources;
pub mod teams;
pub mod tone;

pub use tone::Tone;

/// Filter value meaning "no filter".
pub const ALL: &str = "all";

pub(crate) fn is_all(filter: &str) -> bool {
    filter.is_empty() || filter == ALL
}
