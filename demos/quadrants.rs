//! Prints the four-quadrant scissor layout for a viewport fitted to a window.
//!
//! Usage: cargo run --example quadrants -- [window_width] [window_height]

use canvas_geom::Viewport;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let window_width = args.next().transpose().map_err(|e| miette::miette!("bad width: {}", e))?;
    let window_height = args.next().transpose().map_err(|e| miette::miette!("bad height: {}", e))?;

    let canvas = Viewport::try_new(500.0, 500.0)?;
    let viewport = canvas.fit_within(
        window_width.unwrap_or(canvas.width()),
        window_height.unwrap_or(canvas.height()),
    )?;

    println!("viewport {}x{}", viewport.width(), viewport.height());
    for fill in viewport.quadrants() {
        let s = fill.scissor;
        let c = fill.color;
        println!(
            "scissor x={} y={} w={} h={} color=({}, {}, {}, {})",
            s.x, s.y, s.width, s.height, c.r, c.g, c.b, c.a
        );
    }
    Ok(())
}
