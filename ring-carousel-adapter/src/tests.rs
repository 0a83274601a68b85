use crate::*;

use ring_carousel::{CarouselOptions, Item, Phase, Roster};

fn ring(count: usize) -> Controller<u64, u32> {
    let roster = Roster::from_items((0..count).map(|i| Item {
        key: i as u64,
        category: (i / 3) as u32,
    }));
    Controller::new(roster, CarouselOptions::default())
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(easing.sample(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.sample(1.0), 1.0, "{easing:?}");
    }
    // Ease-out front-loads the motion.
    assert_eq!(Easing::EaseOutCubic.sample(0.5), 0.875);
}

#[test]
fn tween_samples_and_finishes_exactly_on_target() {
    let t = Tween::new(0.1, 0.3, 100, 200, Easing::EaseOutCubic);
    assert_eq!(t.sample(0), 0.1);
    assert_eq!(t.sample(100), 0.1);
    assert!(!t.is_done(299));
    assert!(t.is_done(300));
    assert_eq!(t.sample(300), 0.3);
    assert_eq!(t.sample(10_000), 0.3);

    let z = Tween::new(1.0, 2.0, 0, 0, Easing::Linear);
    assert_eq!(z.duration_ms, 1);
    assert_eq!(z.sample(1), 2.0);
}

#[test]
fn tween_retarget_starts_from_current_sample() {
    let mut t = Tween::new(0.0, 10.0, 0, 100, Easing::Linear);
    t.retarget(50, -4.0, 200);
    assert_eq!(t.from, 5.0);
    assert_eq!(t.to, -4.0);
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.duration_ms, 200);
}

#[test]
fn controller_jump_drives_cursor_along_shortest_path() {
    let mut c = ring(9);
    let to = c.jump_to_index(7, 0).unwrap();
    assert_eq!(to, -2.0);
    assert!(c.is_animating());
    assert_eq!(c.carousel().phase(), Phase::Jumping);

    let mut last = c.carousel().cursor();
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        let cur = c.tick(now_ms).unwrap();
        assert!(cur <= last, "t={now_ms} cur={cur} last={last}");
        assert!(cur >= -2.0);
        last = cur;
        assert!(now_ms <= 1_000, "jump never finished");
    }

    assert_eq!(c.carousel().cursor(), -2.0);
    assert_eq!(c.carousel().active_index(), Some(7));
    assert_eq!(c.carousel().phase(), Phase::Idle);

    // Auto-scroll takes over on the next frame.
    let next = c.tick(now_ms + 16).unwrap();
    assert!(next > -2.0);
}

#[test]
fn jump_tween_is_the_only_cursor_writer() {
    let mut c = ring(9);
    c.on_pointer_down(500.0);
    c.on_pointer_move(200.0);
    c.on_pointer_up();
    assert!(c.carousel().momentum() != 0.0);

    let from = c.carousel().cursor();
    let to = c.jump_to_index(1, 1_000).unwrap();
    assert_eq!(c.carousel().momentum(), 0.0);

    let expected = Tween::new(from, to, 1_000, 900, Easing::EaseOutCubic);
    for now_ms in [1_016u64, 1_200, 1_450, 1_700] {
        let cur = c.tick(now_ms).unwrap();
        assert_eq!(cur, expected.sample(now_ms));
    }
}

#[test]
fn pointer_down_cancels_jump() {
    let mut c = ring(9);
    c.jump_to_index(4, 0).unwrap();
    let mid = c.tick(300).unwrap();

    c.on_pointer_down(10.0);
    assert!(!c.is_animating());
    assert!(c.carousel().is_dragging());

    assert_eq!(c.tick(316), Some(mid));
    assert_eq!(c.tick(1_000), Some(mid));
}

#[test]
fn jump_releases_held_pointer() {
    let mut c = ring(9);
    c.on_pointer_down(100.0);
    assert!(c.carousel().is_dragging());

    assert_eq!(c.jump_to_index(3, 0), Some(3.0));
    assert_eq!(c.carousel().phase(), Phase::Jumping);

    // Late moves from the released pointer do not touch the cursor.
    let before = c.carousel().cursor();
    c.on_pointer_move(-400.0);
    assert_eq!(c.carousel().cursor(), before);
    assert_eq!(c.carousel().phase(), Phase::Jumping);

    c.on_pointer_up();
    assert!(c.is_animating());
    assert_eq!(c.carousel().phase(), Phase::Jumping);

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        assert!(now_ms <= 1_000, "jump never finished");
    }
    assert_eq!(c.carousel().cursor(), 3.0);
    assert_eq!(c.carousel().active_index(), Some(3));
}

#[test]
fn second_jump_retargets_from_current_position() {
    let mut c = ring(9);
    c.jump_to_index(4, 0).unwrap();
    let mid = c.tick(300).unwrap();

    let to = c.jump_to_index(6, 300).unwrap();
    assert!(c.is_animating());
    // The new curve starts where the old one was, without a jump back.
    assert_eq!(c.tick(300), Some(mid));

    let mut last = mid;
    let mut now_ms = 300u64;
    while c.is_animating() {
        now_ms += 16;
        let cur = c.tick(now_ms).unwrap();
        assert!(cur >= last, "t={now_ms} cur={cur} last={last}");
        last = cur;
        assert!(now_ms <= 1_300, "jump never finished");
    }
    assert_eq!(c.carousel().cursor(), to);
    assert_eq!(c.carousel().active_index(), Some(6));
}

#[test]
fn cancel_animation_leaves_cursor_in_place() {
    let mut c = ring(9);
    c.jump_to_index(3, 0).unwrap();
    let mid = c.tick(450).unwrap();
    c.cancel_animation();
    assert!(!c.is_animating());
    assert_eq!(c.carousel().phase(), Phase::Idle);
    assert_eq!(c.carousel().cursor(), mid);
}

#[test]
fn jump_to_category_targets_first_member() {
    let roster = Roster::from_groups([
        ("leadership", vec![0u64, 1, 2]),
        ("overall", vec![3, 4]),
        ("web", vec![5, 6, 7, 8]),
    ]);
    let mut c = Controller::new(roster, CarouselOptions::default())
        .with_jump_options(JumpOptions {
            duration_ms: 100,
            easing: Easing::Linear,
        });

    assert_eq!(c.jump_to_category(&"web", 0), Some(-4.0));
    while c.is_animating() {
        c.tick(200);
    }
    assert_eq!(c.carousel().active_category(), Some(&"web"));

    assert_eq!(c.jump_to_category(&"missing", 300), None);
    assert!(!c.is_animating());
}

#[test]
fn out_of_range_jump_keeps_current_animation() {
    let mut c = ring(9);
    c.jump_to_index(2, 0).unwrap();
    assert_eq!(c.jump_to_index(9, 10), None);
    assert!(c.is_animating());
}

#[test]
fn shutdown_stops_ticks_events_and_tween() {
    let mut c = ring(9);
    c.jump_to_index(5, 0).unwrap();
    c.tick(100);
    c.shutdown();

    assert!(!c.is_running());
    assert!(!c.is_animating());
    assert_eq!(c.carousel().phase(), Phase::Idle);

    let frozen = c.carousel().cursor();
    assert_eq!(c.tick(200), None);
    c.on_pointer_down(0.0);
    c.on_pointer_move(-500.0);
    assert_eq!(c.jump_to_index(1, 300), None);
    assert_eq!(c.carousel().cursor(), frozen);
    assert!(!c.carousel().is_dragging());
}

#[test]
fn empty_ring_ticks_without_moving() {
    let mut c: Controller<u64, u32> =
        Controller::new(Roster::default(), CarouselOptions::default());
    for now_ms in [0u64, 16, 32] {
        assert_eq!(c.tick(now_ms), Some(0.0));
    }
    assert_eq!(c.jump_to_index(0, 48), None);
}

#[test]
fn example_controller_jump_smoke() {
    let mut c = ring(12);
    c.on_viewport_width(Some(1440.0));
    for frame in 0..30u64 {
        c.tick(frame * 16);
    }
    let to = c.jump_to_index(10, 480).unwrap();
    assert!((to - c.carousel().cursor()).abs() <= 6.0);

    let mut now_ms = 480u64;
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    assert_eq!(c.carousel().active_index(), Some(10));
    c.shutdown();
    assert_eq!(c.tick(now_ms + 16), None);
}
