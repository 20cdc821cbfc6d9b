//! Vector clocks: state, comparison and truncation.
//!
//! The binary format lives in `crate::codec`.

pub mod compare;
pub mod truncate;
pub mod vector;

// Re-export for convenience
pub use truncate::TruncatePolicy;
pub use vector::VClock;
