//! # qa-status
//!
//! QA status table: one packed [`StatusWord`] per (detector, event specie),
//! with a 4-bit nibble per processing [`Stage`]. [`QaStatus`] is the
//! registry; [`layout`] owns the bit packing.

pub mod layout;
pub mod registry;
pub mod render;
pub mod scope;
pub mod word;

pub use layout::{offset, Stage};
pub use registry::{QaStatus, RawTarget, Target};
pub use scope::StageScope;
pub use word::StatusWord;
