//! A headless ring carousel engine.
//!
//! For adapter-level utilities (jump tweens, a frame controller), see the
//! `ring-carousel-adapter` crate.
//!
//! Items sit on a ring of fixed length `N`. A single unbounded scroll `cursor` says which index
//! is centered; every item's on-screen transform (position, depth, scale, rotation, opacity,
//! stacking order) is a pure function of its shortest signed ring distance to that cursor.
//! Auto-scroll, drag with momentum and jump navigation all move the same scalar, so the ring
//! never has an end to special-case.
//!
//! It is UI-agnostic. A GUI/web layer is expected to provide:
//! - the viewport width (or nothing, to use the fallback geometry)
//! - pointer x coordinates on press / move / release
//! - one `advance()` call per rendered frame
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod carousel;
mod layout;
mod options;
pub mod ring;
mod roster;
mod state;
mod types;


pub use carousel::{Carousel, OnActiveChangeCallback};
pub use layout::{item_transform, ring_geometry};
pub use options::{
    CardBreakpoint, CardSizing, CarouselOptions, DEFAULT_AUTO_SPEED, DEFAULT_CARD_GAP,
    DEFAULT_CARD_WIDTH, DEFAULT_DRAG_SENSITIVITY, DEFAULT_FALLBACK_VIEWPORT_WIDTH,
    DEFAULT_MOMENTUM_DECAY, DEFAULT_MOMENTUM_EPSILON, RingStyle,
};
pub use roster::{Item, Roster};
pub use state::MotionState;
pub use types::{CategoryId, ItemKey, ItemTransform, Phase, RingGeometry};
