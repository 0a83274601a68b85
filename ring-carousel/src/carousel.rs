use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::layout::{item_transform, ring_geometry};
use crate::options::measured_width;
use crate::ring::{closest_index, shortest_delta, signed_distance};
use crate::{
    CarouselOptions, CategoryId, Item, ItemKey, ItemTransform, MotionState, Phase, RingGeometry,
    Roster,
};

/// A callback fired when the centered item's category changes.
///
/// Receives the new active index and its category.
pub type OnActiveChangeCallback<C> = Arc<dyn Fn(usize, &C) + Send + Sync>;

/// A headless ring carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with viewport widths, pointer x coordinates and one `advance()` per
///   rendered frame.
/// - Rendering is exposed via zero-allocation iteration (`for_each_item_transform`).
///
/// All layout is derived from a single unbounded `cursor`; nothing is cached between frames.
///
/// For time-based "jump to item" navigation, see the `ring-carousel-adapter` crate.
#[derive(Clone)]
pub struct Carousel<K = ItemKey, C = CategoryId> {
    options: CarouselOptions,
    roster: Roster<K, C>,
    viewport_width: Option<f64>,

    cursor: f64,
    momentum: f64,
    phase: Phase,
    drag_x: f64,

    active_index: Option<usize>,
    on_active_change: Option<OnActiveChangeCallback<C>>,
}

impl<K, C: PartialEq> Carousel<K, C> {
    pub fn new(roster: Roster<K, C>, options: CarouselOptions) -> Self {
        let options = options.sanitized();
        cdebug!(
            count = roster.len(),
            initial_cursor = options.initial_cursor,
            "Carousel::new"
        );
        let cursor = options.initial_cursor;
        let mut c = Self {
            options,
            roster,
            viewport_width: None,
            cursor,
            momentum: 0.0,
            phase: Phase::Idle,
            drag_x: 0.0,
            active_index: None,
            on_active_change: None,
        };
        c.active_index = closest_index(c.cursor, c.count());
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options. Cursor, momentum and phase are kept.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options.sanitized();
        ctrace!(
            auto_speed = self.options.auto_speed,
            card_gap = self.options.card_gap,
            "Carousel::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_active_change(
        &mut self,
        on_active_change: Option<impl Fn(usize, &C) + Send + Sync + 'static>,
    ) {
        self.on_active_change = on_active_change.map(|f| Arc::new(f) as _);
    }

    pub fn roster(&self) -> &Roster<K, C> {
        &self.roster
    }

    pub fn count(&self) -> usize {
        self.roster.len()
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_jumping(&self) -> bool {
        self.phase == Phase::Jumping
    }

    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    /// Sets the measured viewport width. `None`, non-finite or non-positive widths mean
    /// "unmeasured" and select the fallback geometry.
    pub fn set_viewport_width(&mut self, width: Option<f64>) {
        let width = measured_width(width);
        if self.viewport_width == width {
            return;
        }
        ctrace!(?width, "Carousel::set_viewport_width");
        self.viewport_width = width;
    }

    pub fn geometry(&self) -> RingGeometry {
        ring_geometry(&self.options, self.viewport_width)
    }

    pub fn stride(&self) -> f64 {
        self.geometry().stride
    }

    /// Runs one frame.
    ///
    /// While idle, momentum is applied and decayed; once it falls to `momentum_epsilon` it snaps
    /// to zero and the cursor auto-scrolls at `auto_speed` pixels per frame. Dragging and
    /// jumping frames leave the cursor to their own driver. The active item is recomputed in
    /// every phase.
    pub fn advance(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }

        if self.phase == Phase::Idle {
            if self.momentum.abs() > self.options.momentum_epsilon {
                self.cursor += self.momentum;
                self.momentum *= self.options.momentum_decay;
            } else {
                self.momentum = 0.0;
                self.cursor += self.options.auto_speed / self.stride();
            }
        }

        self.refresh_active();
    }

    /// Captures the pointer at `x`.
    ///
    /// Zeroes momentum and cancels a jump in flight. Calling this while already dragging
    /// re-anchors the drag at `x`.
    pub fn begin_drag(&mut self, x: f64) {
        if !x.is_finite() {
            cwarn!(x, "Carousel::begin_drag: ignoring non-finite pointer");
            return;
        }
        if self.phase == Phase::Jumping {
            cdebug!(cursor = self.cursor, "jump interrupted by drag");
        }
        self.phase = Phase::Dragging;
        self.drag_x = x;
        self.momentum = 0.0;
    }

    /// Moves the captured pointer to `x`.
    ///
    /// The cursor moves against the pointer and momentum is set to the last per-event velocity,
    /// so a release mid-gesture keeps gliding.
    pub fn update_drag(&mut self, x: f64) {
        if self.phase != Phase::Dragging {
            return;
        }
        if !x.is_finite() {
            cwarn!(x, "Carousel::update_drag: ignoring non-finite pointer");
            return;
        }
        let dx = x - self.drag_x;
        self.drag_x = x;
        let delta = dx * self.options.drag_sensitivity / self.stride();
        self.cursor -= delta;
        self.momentum = -delta;
    }

    /// Releases the pointer. Momentum is left to decay in `advance`.
    pub fn end_drag(&mut self) {
        if self.phase == Phase::Dragging {
            self.phase = Phase::Idle;
        }
    }

    /// Enters the jumping phase toward `target` and returns the cursor value to tween to.
    ///
    /// The returned cursor is reached along the shorter way around the ring. Returns `None`
    /// (and changes nothing) for an empty ring or an out-of-range target.
    pub fn begin_jump(&mut self, target: usize) -> Option<f64> {
        let count = self.count();
        if target >= count {
            cwarn!(
                index = target,
                count,
                "Carousel::begin_jump: target out of range"
            );
            return None;
        }
        self.momentum = 0.0;
        self.phase = Phase::Jumping;
        let to = self.cursor + shortest_delta(self.cursor, target, count);
        cdebug!(from = self.cursor, to, index = target, "jump started");
        Some(to)
    }

    /// Writes the tween-driven cursor. Ignored unless jumping.
    pub fn set_jump_cursor(&mut self, cursor: f64) {
        if self.phase != Phase::Jumping || !cursor.is_finite() {
            return;
        }
        self.cursor = cursor;
    }

    /// Leaves the jumping phase (finished or cancelled).
    pub fn end_jump(&mut self) {
        if self.phase == Phase::Jumping {
            cdebug!(cursor = self.cursor, "jump ended");
            self.phase = Phase::Idle;
        }
    }

    /// Returns a snapshot of the current motion.
    pub fn motion_state(&self) -> MotionState {
        MotionState {
            cursor: self.cursor,
            momentum: self.momentum,
            phase: self.phase,
        }
    }

    /// Restores cursor and momentum from a snapshot; the phase always comes back as `Idle`.
    pub fn restore_motion_state(&mut self, state: MotionState) {
        self.cursor = if state.cursor.is_finite() {
            state.cursor
        } else {
            self.options.initial_cursor
        };
        self.momentum = if state.momentum.is_finite() {
            state.momentum
        } else {
            0.0
        };
        self.phase = Phase::Idle;
        self.refresh_active();
    }

    /// Index of the item nearest the cursor as of the last frame.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_item(&self) -> Option<&Item<K, C>> {
        self.roster.get(self.active_index?)
    }

    pub fn active_category(&self) -> Option<&C> {
        self.active_item().map(|it| &it.category)
    }

    fn refresh_active(&mut self) {
        let prev = self.active_index;
        let next = closest_index(self.cursor, self.count());
        self.active_index = next;

        let Some(index) = next else {
            return;
        };
        let changed = match prev {
            Some(p) => self.roster.category_of(p) != self.roster.category_of(index),
            None => true,
        };
        if !changed {
            return;
        }
        if let (Some(cb), Some(category)) =
            (&self.on_active_change, self.roster.category_of(index))
        {
            cb(index, category);
        }
    }

    /// Shortest signed ring distance from the cursor to item `index`.
    pub fn relative_position(&self, index: usize) -> Option<f64> {
        (index < self.count()).then(|| signed_distance(index, self.cursor, self.count()))
    }

    pub fn item_transform(&self, index: usize) -> Option<ItemTransform> {
        let rel = self.relative_position(index)?;
        Some(item_transform(
            index,
            rel,
            &self.geometry(),
            &self.options.style,
        ))
    }

    /// Computes every item's transform in index order.
    pub fn for_each_item_transform(&self, mut f: impl FnMut(ItemTransform)) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let geometry = self.geometry();
        for i in 0..count {
            let rel = signed_distance(i, self.cursor, count);
            f(item_transform(i, rel, &geometry, &self.options.style));
        }
    }

    /// Collects every item's transform into `out` (clears `out` first).
    pub fn collect_item_transforms(&self, out: &mut Vec<ItemTransform>) {
        out.clear();
        self.for_each_item_transform(|t| out.push(t));
    }

    pub fn item_transforms(&self) -> Vec<ItemTransform> {
        let mut out = Vec::with_capacity(self.count());
        self.collect_item_transforms(&mut out);
        out
    }
}

impl<K: core::fmt::Debug, C: core::fmt::Debug> core::fmt::Debug for Carousel<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("roster", &self.roster)
            .field("viewport_width", &self.viewport_width)
            .field("cursor", &self.cursor)
            .field("momentum", &self.momentum)
            .field("phase", &self.phase)
            .field("active_index", &self.active_index)
            .finish_non_exhaustive()
    }
}
