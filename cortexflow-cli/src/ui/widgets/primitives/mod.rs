//! Reusable low-level UI primitives.

pub mod format;
mod placeholder;

pub use format::padded_row;
pub use placeholder::PlaceholderImage;
