use alloc::vec;
use alloc::vec::Vec;

/// Card width used while the viewport width is above every breakpoint (or unknown).
pub const DEFAULT_CARD_WIDTH: f64 = 210.0;
/// Horizontal space between adjacent cards.
pub const DEFAULT_CARD_GAP: f64 = 28.0;
/// Viewport width assumed when the host cannot measure one.
pub const DEFAULT_FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;
/// Idle auto-scroll speed in pixels per frame.
pub const DEFAULT_AUTO_SPEED: f64 = 0.4;
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 1.2;
/// Per-frame momentum multiplier.
pub const DEFAULT_MOMENTUM_DECAY: f64 = 0.94;
/// Momentum at or below this magnitude (index units per frame) snaps to zero.
pub const DEFAULT_MOMENTUM_EPSILON: f64 = 0.005;

/// A responsive card width: applies while `viewport_width <= max_viewport_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardBreakpoint {
    pub max_viewport_width: f64,
    pub card_width: f64,
}

/// Maps a viewport width to a card width.
///
/// Breakpoints are checked in order; the first match wins.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSizing {
    pub breakpoints: Vec<CardBreakpoint>,
    pub default_card_width: f64,
}

impl Default for CardSizing {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                CardBreakpoint {
                    max_viewport_width: 480.0,
                    card_width: 115.0,
                },
                CardBreakpoint {
                    max_viewport_width: 768.0,
                    card_width: 155.0,
                },
            ],
            default_card_width: DEFAULT_CARD_WIDTH,
        }
    }
}

impl CardSizing {
    /// A single card width regardless of viewport.
    pub fn fixed(card_width: f64) -> Self {
        Self {
            breakpoints: Vec::new(),
            default_card_width: card_width,
        }
    }

    /// `None`, non-finite and non-positive widths mean the viewport has not been measured; the
    /// default width is used.
    pub fn card_width_for(&self, viewport_width: Option<f64>) -> f64 {
        let Some(w) = measured_width(viewport_width) else {
            return self.default_card_width;
        };
        self.breakpoints
            .iter()
            .find(|bp| w <= bp.max_viewport_width)
            .map_or(self.default_card_width, |bp| bp.card_width)
    }
}

/// Per-item visual falloff as a function of ring distance `rel`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingStyle {
    /// `y = rel² * arch`.
    pub arch: f64,
    pub center_scale: f64,
    pub scale_falloff: f64,
    pub min_scale: f64,
    /// Degrees of rotation per index of distance.
    pub tilt_per_index: f64,
    pub opacity_falloff: f64,
    pub min_opacity: f64,
    pub z_base: f64,
    pub z_falloff: f64,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            arch: 6.0,
            center_scale: 1.1,
            scale_falloff: 0.08,
            min_scale: 0.4,
            tilt_per_index: -6.0,
            opacity_falloff: 0.18,
            min_opacity: 0.0,
            z_base: 50.0,
            z_falloff: 5.0,
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Every field is plain data; with `feature = "serde"` the whole struct can be loaded from any
/// serde format. Use [`CarouselOptions::sanitized`] on untrusted input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    pub card_sizing: CardSizing,
    pub card_gap: f64,
    pub fallback_viewport_width: f64,
    /// Idle auto-scroll speed in pixels per frame.
    pub auto_speed: f64,
    pub drag_sensitivity: f64,
    pub momentum_decay: f64,
    pub momentum_epsilon: f64,
    pub style: RingStyle,
    /// Cursor value at construction.
    pub initial_cursor: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            card_sizing: CardSizing::default(),
            card_gap: DEFAULT_CARD_GAP,
            fallback_viewport_width: DEFAULT_FALLBACK_VIEWPORT_WIDTH,
            auto_speed: DEFAULT_AUTO_SPEED,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            momentum_decay: DEFAULT_MOMENTUM_DECAY,
            momentum_epsilon: DEFAULT_MOMENTUM_EPSILON,
            style: RingStyle::default(),
            initial_cursor: 0.0,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_sizing(mut self, card_sizing: CardSizing) -> Self {
        self.card_sizing = card_sizing;
        self
    }

    pub fn with_card_gap(mut self, card_gap: f64) -> Self {
        self.card_gap = card_gap;
        self
    }

    pub fn with_fallback_viewport_width(mut self, width: f64) -> Self {
        self.fallback_viewport_width = width;
        self
    }

    pub fn with_auto_speed(mut self, auto_speed: f64) -> Self {
        self.auto_speed = auto_speed;
        self
    }

    pub fn with_drag_sensitivity(mut self, drag_sensitivity: f64) -> Self {
        self.drag_sensitivity = drag_sensitivity;
        self
    }

    pub fn with_momentum(mut self, decay: f64, epsilon: f64) -> Self {
        self.momentum_decay = decay;
        self.momentum_epsilon = epsilon;
        self
    }

    pub fn with_style(mut self, style: RingStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_initial_cursor(mut self, initial_cursor: f64) -> Self {
        self.initial_cursor = initial_cursor;
        self
    }

    /// Replaces values that would break the frame math with defaults.
    ///
    /// - non-finite numbers fall back to their default
    /// - card widths and the fallback viewport must be positive, the gap non-negative
    /// - `momentum_decay` is clamped to `[0, 1]`, `momentum_epsilon` must be non-negative
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.card_sizing.default_card_width = positive_or(
            self.card_sizing.default_card_width,
            defaults.card_sizing.default_card_width,
        );
        self.card_sizing.breakpoints.retain(|bp| {
            bp.max_viewport_width.is_finite() && bp.card_width.is_finite() && bp.card_width > 0.0
        });
        self.card_gap = non_negative_or(self.card_gap, defaults.card_gap);
        self.fallback_viewport_width =
            positive_or(self.fallback_viewport_width, defaults.fallback_viewport_width);
        self.auto_speed = finite_or(self.auto_speed, defaults.auto_speed);
        self.drag_sensitivity = finite_or(self.drag_sensitivity, defaults.drag_sensitivity);
        self.momentum_decay =
            finite_or(self.momentum_decay, defaults.momentum_decay).clamp(0.0, 1.0);
        self.momentum_epsilon = non_negative_or(self.momentum_epsilon, defaults.momentum_epsilon);
        self.initial_cursor = finite_or(self.initial_cursor, defaults.initial_cursor);

        let s = &mut self.style;
        let d = defaults.style;
        s.arch = finite_or(s.arch, d.arch);
        s.center_scale = finite_or(s.center_scale, d.center_scale);
        s.scale_falloff = finite_or(s.scale_falloff, d.scale_falloff);
        s.min_scale = finite_or(s.min_scale, d.min_scale);
        s.tilt_per_index = finite_or(s.tilt_per_index, d.tilt_per_index);
        s.opacity_falloff = finite_or(s.opacity_falloff, d.opacity_falloff);
        s.min_opacity = finite_or(s.min_opacity, d.min_opacity);
        s.z_base = finite_or(s.z_base, d.z_base);
        s.z_falloff = finite_or(s.z_falloff, d.z_falloff);

        self
    }
}

/// Drops widths that cannot be a real measurement (non-finite or non-positive).
pub(crate) fn measured_width(width: Option<f64>) -> Option<f64> {
    width.filter(|w| w.is_finite() && *w > 0.0)
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

fn positive_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { fallback }
}

fn non_negative_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v >= 0.0 { v } else { fallback }
}
