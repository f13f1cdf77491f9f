//! Lumaview - library crate.
//!
//! Provides the point-transform engine and viewer session used by the
//! desktop application: decoded image buffers, the a/b/gamma remap, and
//! the session state tying them together.

pub mod buffer;
pub mod error;
pub mod image_io;
pub mod session;
pub mod transform;
