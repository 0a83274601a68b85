/// Default stable key type for roster items.
pub type ItemKey = u64;

/// Default category identifier type.
pub type CategoryId = u32;

/// Which driver currently owns the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Momentum decay, then idle auto-scroll.
    #[default]
    Idle,
    /// A pointer is captured; the cursor follows pointer deltas.
    Dragging,
    /// A time-based tween writes the cursor directly.
    Jumping,
}

/// Visual properties for one ring item, in host pixels/degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    pub index: usize,
    /// Signed ring distance from the cursor, in `[-N/2, N/2)`.
    pub rel: f64,
    /// Left edge of the card.
    pub x: f64,
    /// Downward depth offset (always `>= 0`).
    pub y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

/// Pixel geometry derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingGeometry {
    pub card_width: f64,
    /// Distance between adjacent card origins (`card_width + gap`).
    pub stride: f64,
    /// Horizontal center of the viewport.
    pub center_x: f64,
}
