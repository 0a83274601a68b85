use ring_carousel::{Carousel, CarouselOptions, CategoryId, ItemKey, Roster};

use crate::{JumpOptions, Tween};

/// A framework-neutral controller that wraps a `ring_carousel::Carousel` and owns the frame loop
/// contract (physics ticks, pointer events, tween-driven jumps, shutdown).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` / `on_pointer_*` when UI events occur
/// - `tick(now_ms)` once per animation frame
/// - `shutdown()` when the carousel is unmounted
///
/// Exactly one driver writes the cursor per frame: while a jump tween is active the tween writes
/// it and the physics step is skipped.
#[derive(Clone, Debug)]
pub struct Controller<K = ItemKey, C = CategoryId> {
    c: Carousel<K, C>,
    tween: Option<Tween>,
    jump: JumpOptions,
    running: bool,
}

impl<K, C: PartialEq> Controller<K, C> {
    pub fn new(roster: Roster<K, C>, options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(roster, options))
    }

    pub fn from_carousel(c: Carousel<K, C>) -> Self {
        Self {
            c,
            tween: None,
            jump: JumpOptions::default(),
            running: true,
        }
    }

    pub fn with_jump_options(mut self, jump: JumpOptions) -> Self {
        self.jump = jump;
        self
    }

    pub fn jump_options(&self) -> JumpOptions {
        self.jump
    }

    pub fn set_jump_options(&mut self, jump: JumpOptions) {
        self.jump = jump;
    }

    pub fn carousel(&self) -> &Carousel<K, C> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<K, C> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<K, C> {
        self.c
    }

    /// `false` after [`Self::shutdown`].
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops an in-flight jump, leaving the cursor where the tween last put it.
    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            self.c.end_jump();
        }
    }

    pub fn on_viewport_width(&mut self, width: Option<f64>) {
        if !self.running {
            return;
        }
        self.c.set_viewport_width(width);
    }

    /// Pointer press. This cancels any active tween.
    pub fn on_pointer_down(&mut self, x: f64) {
        if !self.running {
            return;
        }
        self.tween = None;
        self.c.begin_drag(x);
    }

    pub fn on_pointer_move(&mut self, x: f64) {
        if !self.running {
            return;
        }
        self.c.update_drag(x);
    }

    /// Pointer release (or the pointer leaving the carousel).
    pub fn on_pointer_up(&mut self) {
        if !self.running {
            return;
        }
        self.c.end_drag();
    }

    /// Starts a jump to item `index` along the shorter way around the ring.
    ///
    /// Momentum is zeroed and a held pointer is released; a jump already in flight is retargeted
    /// rather than restarted. Returns the target cursor, or `None` for an out-of-range index (or
    /// after shutdown).
    pub fn jump_to_index(&mut self, index: usize, now_ms: u64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let from = self.c.cursor();
        let to = self.c.begin_jump(index)?;
        adebug!(
            from,
            to,
            index,
            duration_ms = self.jump.duration_ms,
            "Controller::jump_to_index"
        );
        match self.tween.as_mut() {
            // A jump already in flight continues from where its curve is now.
            Some(tween) => tween.retarget(now_ms, to, self.jump.duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    from,
                    to,
                    now_ms,
                    self.jump.duration_ms,
                    self.jump.easing,
                ))
            }
        }
        Some(to)
    }

    /// Starts a jump to the first item of `category`.
    pub fn jump_to_category(&mut self, category: &C, now_ms: u64) -> Option<f64> {
        let Some(index) = self.c.roster().first_index_of(category) else {
            awarn!("Controller::jump_to_category: no item in category");
            return None;
        };
        self.jump_to_index(index, now_ms)
    }

    /// Advances one frame.
    ///
    /// - If a tween is active, writes its sample into the cursor, then runs the frame with
    ///   physics skipped; the jump ends once the tween is done.
    /// - Otherwise runs the physics frame (momentum or auto-scroll).
    ///
    /// Returns the cursor after the frame, or `None` once shut down.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if !self.running {
            return None;
        }

        if self.tween.is_some() && !self.c.is_jumping() {
            // The carousel was moved out of the jump directly; the tween no longer owns it.
            self.tween = None;
        }

        let Some(tween) = self.tween else {
            self.c.advance();
            return Some(self.c.cursor());
        };

        self.c.set_jump_cursor(tween.sample(now_ms));
        self.c.advance();

        if tween.is_done(now_ms) {
            atrace!(cursor = self.c.cursor(), now_ms, "jump tween done");
            self.tween = None;
            self.c.end_jump();
        }

        Some(self.c.cursor())
    }

    /// Stops the frame loop: cancels the tween, releases the pointer, and turns every later
    /// `tick` and event into a no-op.
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        adebug!(cursor = self.c.cursor(), "Controller::shutdown");
        self.cancel_animation();
        self.c.end_drag();
        self.running = false;
    }
}
