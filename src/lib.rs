//! Air defense replay viewer.
//!
//! Plays back a precomputed air-defense simulation: frames are fetched once,
//! a clock cycles through them, and each frame is turned into a scene of
//! drawable primitives that is painted onto a canvas from scratch.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod net;
pub mod render;
pub mod state;
pub mod timer;
pub mod util;
