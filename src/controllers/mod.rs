//! Interaction Controllers
//!
//! Page behaviors as plain state objects. Components hold them in signals;
//! only `reveal` touches the DOM directly.

mod contact;
mod filter;
mod nav;
mod pagination;
mod reveal;
mod visibility;

pub use contact::{validate, ContactFields, ContactFormState, Feedback, SubmissionPhase, SENDING_LABEL};
pub use filter::{FilterState, ProjectFilter};
pub use nav::{active_section, NavState, SectionBounds, ACTIVE_SECTION_BIAS_PX, ELEVATION_THRESHOLD_PX};
pub use pagination::{Pagination, RevealStep, Toggle, REVEAL_STAGGER_MS, SCROLL_INTO_VIEW_DELAY_MS};
pub use reveal::{RevealState, ScrollReveal, REVEALED_CLASS};
pub use visibility::{is_displayed, CardSlot};
