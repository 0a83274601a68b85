use ring_carousel::{CarouselOptions, Roster};
use ring_carousel_adapter::Controller;

fn main() {
    // Example: a host frame loop driving the controller without holding any UI objects.
    //
    // An adapter would:
    // - call tick(now_ms) from its animation-frame callback
    // - forward pointer press/move/release to on_pointer_*
    // - call jump_to_category when a navigation dot is clicked
    // - apply each item transform to the matching card, then call shutdown() on unmount
    let roster = Roster::from_groups([
        ("leadership", vec![0u64, 1, 2]),
        ("overall", vec![3, 4]),
        ("web", vec![5, 6, 7]),
        ("design", vec![8, 9, 10, 11]),
    ]);
    let mut c = Controller::new(roster, CarouselOptions::default());
    c.on_viewport_width(Some(1280.0));

    let mut now_ms = 0u64;
    for _ in 0..30 {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!(
        "idle: cursor={:.4} active={:?}",
        c.carousel().cursor(),
        c.carousel().active_category()
    );

    let target = c.jump_to_category(&"design", now_ms);
    println!("jump target={target:?}");

    while c.is_animating() {
        now_ms += 16;
        if let Some(cursor) = c.tick(now_ms) {
            if now_ms % 160 == 0 {
                println!("t={now_ms} cursor={cursor:.3}");
            }
        }
    }

    let centered = c
        .carousel()
        .active_index()
        .and_then(|i| c.carousel().item_transform(i));
    println!(
        "done: active={:?} transform={centered:?}",
        c.carousel().active_category()
    );

    c.shutdown();
    println!("after shutdown: tick={:?}", c.tick(now_ms + 16));
}
