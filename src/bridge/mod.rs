//! The bridge layer: converts built frames into Arrow structures for
//! downstream table and chart consumers.
//!
//! The frame layer stays Arrow-agnostic on purpose; everything Arrow-specific
//! lives behind this boundary.

mod arrow_impl;


pub use arrow_impl::frame_to_record_batch;
