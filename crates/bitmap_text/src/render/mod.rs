//! Rendering interface
//!
//! The crate never talks to a GPU or window itself. Surfaces draw through
//! [`DrawBackend`]; [`CommandRecorder`] is the in-crate implementation used by
//! headless hosts and tests.

pub mod backend;
pub mod commands;

pub use backend::{AtlasHandle, DrawBackend, RenderError};
pub use commands::{CommandRecorder, DrawCommand};
