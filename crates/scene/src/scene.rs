//! Document model for easel drawings.
//!
//! A [`Drawing`] is an ordered list of [`Group`]s; a group is an ordered
//! list of placed primitives rendered between start/end markers. Documents
//! arrive either as in-process literals or as untyped JSON (see [`raw`])
//! that is normalized into the typed model before any rendering happens.

mod document;
pub mod raw;

pub use document::{Drawing, Group};
pub use raw::{normalize, NormalizeError, RawDrawing, RawElement, RawGroup, RawSpec};
