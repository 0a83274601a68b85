use crate::Phase;

/// A lightweight, serializable snapshot of the carousel's motion.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Restoring a snapshot never resumes a drag or a jump: the pointer anchor and the tween live
/// outside of it, so a restored `Dragging`/`Jumping` phase comes back as `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionState {
    pub cursor: f64,
    pub momentum: f64,
    pub phase: Phase,
}
