//! Shared helpers.
//!
//! - Localization: the two label languages and their marker vocabulary

pub mod localization;

pub use localization::{Language, Markers};
