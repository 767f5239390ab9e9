//! UI module for the deck renderer
//!
//! # Architecture
//!
//! - **Animation** (`animation`): pure keyframe curves shared by CPU and GPU
//! - **Effects** (`effects`): the ambient shader layer and its generator
//! - **Components** (`components`): slide rendering and stage chrome
//! - **Theme** (`theme`): palette, typography scale, and container styles

pub mod animation;
pub mod components;
pub mod effects;
pub mod theme;
