//! Adapter utilities for the `ring-carousel` crate.
//!
//! The `ring-carousel` crate is UI-agnostic and focuses on the ring math and motion state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based "jump to item" navigation
//! - A controller that owns the per-frame tick, pointer events and shutdown
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use tween::{Easing, JumpOptions, Tween};
