use ring_carousel::{Carousel, CarouselOptions, Roster};

fn main() {
    let roster = Roster::from_groups([
        ("leadership", vec!["director", "hod", "coordinator"]),
        ("overall", vec!["lead-a", "lead-b"]),
        ("web", vec!["web-a", "web-b", "web-c"]),
    ]);
    let mut c = Carousel::new(roster, CarouselOptions::default());
    c.set_viewport_width(Some(1280.0));

    for frame in 0..3 {
        c.advance();
        println!(
            "frame={frame} cursor={:.4} active={:?}",
            c.cursor(),
            c.active_category()
        );
        c.for_each_item_transform(|t| {
            println!(
                "  #{:<2} rel={:+.3} x={:.1} y={:.1} rot={:+.1} scale={:.3} opacity={:.2} z={}",
                t.index, t.rel, t.x, t.y, t.rotation_deg, t.scale, t.opacity, t.z_index
            );
        });
    }
}
