//! This file is the root of the `rowframe` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`decode`, `frame`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the small public surface callers actually need: the tagged
//!     value model, the frame builder, and the error type.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod decode;
pub mod error;
pub mod frame;
pub mod observability;
pub mod types;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{DatetimeFormat, QueryModel};
pub use decode::ScalarValue;
pub use error::FrameError;
pub use frame::{build_frame, Column, ColumnData, Frame};
pub use types::{AttrValue, FieldType, Row};
