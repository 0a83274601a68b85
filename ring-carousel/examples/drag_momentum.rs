// Example: a flick gesture followed by momentum decay and idle auto-scroll.
use ring_carousel::{Carousel, CarouselOptions, Item, Roster};

fn main() {
    let roster = Roster::from_items((0..12u64).map(|key| Item {
        key,
        category: (key / 4) as u32,
    }));
    let mut c = Carousel::new(roster, CarouselOptions::default());
    c.set_viewport_width(Some(1024.0));

    // Simulate a pointer flick to the left over a few frames.
    c.begin_drag(800.0);
    for x in [760.0, 700.0, 620.0, 520.0] {
        c.update_drag(x);
        c.advance();
    }
    c.end_drag();
    println!(
        "released: cursor={:.3} momentum={:.4}",
        c.cursor(),
        c.momentum()
    );

    let mut frame = 0u32;
    while c.momentum() != 0.0 {
        c.advance();
        frame += 1;
        if frame % 10 == 0 {
            println!(
                "frame={frame} cursor={:.3} momentum={:.4} active={:?}",
                c.cursor(),
                c.momentum(),
                c.active_index()
            );
        }
    }
    println!("settled after {frame} frames, auto-scroll resumes");

    for _ in 0..60 {
        c.advance();
    }
    println!(
        "after 60 idle frames: cursor={:.4} active={:?}",
        c.cursor(),
        c.active_category()
    );
}
