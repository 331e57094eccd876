pub mod filters;
pub mod nav;

pub use filters::{FilterAction, SavedFilterStore};
pub use nav::{model_rank, section_rank, NavSection, NAV_SECTIONS};
