//! Pure per-frame layout: geometry from the viewport, transforms from ring distance.

use crate::options::{DEFAULT_CARD_GAP, DEFAULT_CARD_WIDTH, measured_width};
use crate::{CarouselOptions, ItemTransform, RingGeometry, RingStyle};

/// Derives card width, stride and viewport center.
///
/// `viewport_width = None` (or a non-finite / non-positive width) means unmeasured: the fallback
/// viewport width sets the center and the default card width sets the stride.
pub fn ring_geometry(options: &CarouselOptions, viewport_width: Option<f64>) -> RingGeometry {
    let viewport_width = measured_width(viewport_width);
    let mut card_width = options.card_sizing.card_width_for(viewport_width);
    let mut stride = card_width + options.card_gap;
    if !(stride.is_finite() && stride > 0.0) {
        card_width = DEFAULT_CARD_WIDTH;
        stride = DEFAULT_CARD_WIDTH + DEFAULT_CARD_GAP;
    }
    let width = viewport_width.unwrap_or(options.fallback_viewport_width);
    RingGeometry {
        card_width,
        stride,
        center_x: width / 2.0,
    }
}

/// Computes the transform of item `index` sitting `rel` ring positions from the cursor.
pub fn item_transform(
    index: usize,
    rel: f64,
    geometry: &RingGeometry,
    style: &RingStyle,
) -> ItemTransform {
    let abs_rel = rel.abs();
    ItemTransform {
        index,
        rel,
        x: rel * geometry.stride + geometry.center_x - geometry.card_width / 2.0,
        y: rel * rel * style.arch,
        rotation_deg: rel * style.tilt_per_index,
        scale: (style.center_scale - abs_rel * style.scale_falloff).max(style.min_scale),
        opacity: (1.0 - abs_rel * style.opacity_falloff).max(style.min_opacity),
        z_index: round_half_up(style.z_base - abs_rel * style.z_falloff) as i32,
    }
}

// Halves round toward +inf, matching how browsers round stacking order.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
