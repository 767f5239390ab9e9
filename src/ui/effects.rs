//! Visual effects for the ambient layer
//!
//! - `decorations`: randomized floating-dot batch generation
//! - `ambient`: WGPU shader widget rendering the pulse glow and the dots

pub mod ambient;
pub mod decorations;
