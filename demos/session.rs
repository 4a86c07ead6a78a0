//! Replays a scripted pointer session and prints what a host would draw.
//!
//! Run with: RUST_LOG=debug cargo run --example session --features tracing

use canvas_geom::geometry::flatten_f32;
use canvas_geom::{Point, Session, Viewport};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(Viewport::try_new(700.0, 700.0)?);

    // circle: press at the center, drag 175px right
    session.pointer_down(Point::new(350.0, 350.0));
    session.pointer_move(Point::new(525.0, 350.0));
    session.pointer_up()?;

    // line: a diagonal across the circle
    session.pointer_down(Point::new(100.0, 600.0));
    session.pointer_move(Point::new(400.0, 300.0));
    session.pointer_move(Point::new(650.0, 150.0));
    session.pointer_up()?;

    println!("{}", session.overlay());
    for (i, corner) in session.markers().chunks(4).enumerate() {
        let corners: Vec<String> = corner.iter().map(|p| format!("({:.3}, {:.3})", p.x, p.y)).collect();
        println!("marker {}: {}", i + 1, corners.join(" "));
    }

    // what a host would upload as the marker vertex buffer
    let buffer = flatten_f32(&session.markers());
    println!("marker buffer: {} floats {:?}", buffer.len(), buffer);
    Ok(())
}
