//! Trackwork layout demo — builds a small layout and walks it.
//!
//! Usage:
//! ```text
//! cargo run --example layout
//! RUST_LOG=trackwork=trace cargo run --example layout
//! ```

use trackwork::segment::Origin;
use trackwork::tessellation::{TessellateSegment, TessellationParams};
use trackwork::{Circular, Point, Result, Straight, Switch, TrackGeometry, TrackNetwork};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trackwork=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("layout=info".parse().unwrap_or_default())
        .add_directive("trackwork=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut network = TrackNetwork::new();
    let main_line = network.insert(Straight::new(Point::new(450.0, 500.0), Point::new(600.0, 500.0))?);
    network.insert(Straight::new(Point::new(600.0, 500.0), Point::new(710.0, 620.0))?);
    network.insert(Switch::new(
        Point::new(710.0, 620.0),
        Point::new(800.0, 620.0),
        Point::new(790.0, 680.0),
    )?);
    network.insert(Circular::new(Point::new(800.0, 620.0), -90.0, 0.0, 60.0)?);

    for segment in network.all() {
        tracing::info!(
            id = %segment.id(),
            length = segment.length(),
            outline = ?segment.outline(),
            "segment"
        );
    }

    if let Some(segment) = network.get(main_line) {
        let id = segment.id().clone();
        let halfway = segment.point_from(Origin::Start, segment.length() / 2.0)?;
        tracing::info!(%id, %halfway, "halfway along the main line");
        network.highlight(&id)?;
    }

    for round in 0..2 {
        for (id, switch) in network.switches() {
            let exit = switch.point_at_distance(switch.start(), switch.length())?;
            tracing::info!(round, %id, active = switch.is_active(), %exit, "switch exit");
        }
        network.toggle_all_switches();
    }

    let ids: Vec<_> = network.all().map(|segment| segment.id().clone()).collect();
    for id in ids {
        let line = TessellateSegment::new(id.clone(), TessellationParams::default()).execute(&network)?;
        tracing::info!(%id, samples = line.points.len(), "tessellated");
    }

    Ok(())
}
