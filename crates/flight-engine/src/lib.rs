//! Flight engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the viewer is built on:
//! one winit window, its wgpu surface, and an anti-aliased line renderer.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
