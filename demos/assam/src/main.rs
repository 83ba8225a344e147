//! `assam` — drag a marker around central Assam and print the hazard alerts.
//!
//! Loads the restricted areas and both hazard feeds from `data/`, starts the
//! animation, drops the marker at a few scripted places, then takes a short
//! seeded random walk from the last drop.
//!
//! Run with:
//!   cargo run -p assam
//!   RUST_LOG=debug cargo run -p assam

mod sinks;
mod sources;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use hz_core::{GeoPoint, HazardConfig};
use hz_session::{HazardSession, SessionBuilder};

use sinks::{ConsolePresenter, CountingSurface, LogNotifier};
use sources::{FileBoundaries, FileFeed};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 42;
const WALK_STEPS:    usize = 12;
/// Largest per-axis move of one random-walk step, in degrees (~2 km).
const WALK_STEP_DEG: f64   = 0.02;

const DROPS: [(&str, GeoPoint); 4] = [
    ("Assam centre",        GeoPoint::new(92.9376, 26.2006)),
    ("Ridge Road approach", GeoPoint::new(92.9400, 26.2900)),
    ("Guwahati outskirts",  GeoPoint::new(91.6500, 26.1000)),
    ("Open country",        GeoPoint::new(91.2000, 25.6000)),
];

type Session = HazardSession<FileFeed, CountingSurface, ConsolePresenter, LogNotifier>;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let surface = Arc::new(CountingSurface::default());
    let notifier = Arc::new(LogNotifier::default());

    let mut session: Session = SessionBuilder::new(
        HazardConfig::default(),
        Arc::new(FileFeed::new(&data)),
        FileBoundaries::new(&data.join("boundaries.geojson")),
        surface.clone(),
        Arc::new(ConsolePresenter),
        notifier.clone(),
    )
    .build()
    .await?;

    let snapshot = session.store().current();
    println!(
        "Loaded {} restricted areas, {} warnings (generation {})",
        snapshot.restricted_areas.len(),
        snapshot.warning_count(),
        snapshot.generation,
    );

    // ── Scripted drops ────────────────────────────────────────────────────
    for (label, point) in DROPS {
        println!("\n{label} {point}");
        drag_and_drop(&mut session, point).await;
    }

    // ── Random walk ───────────────────────────────────────────────────────
    let mut rng = SmallRng::seed_from_u64(SEED);
    let start = DROPS[0].1;
    drag_and_drop(&mut session, start).await;
    let mut hazard_drops = 0usize;
    for step in 0..WALK_STEPS {
        let here = session.controller().position();
        let next = GeoPoint::new(
            here.lon + rng.gen_range(-WALK_STEP_DEG..=WALK_STEP_DEG),
            here.lat + rng.gen_range(-WALK_STEP_DEG..=WALK_STEP_DEG),
        );
        println!("\nwalk step {step} {next}");
        if drag_and_drop(&mut session, next).await {
            hazard_drops += 1;
        }
    }

    // Let the animation run for a moment, then refresh once by hand.
    tokio::time::sleep(Duration::from_millis(250)).await;
    let report = session.refresh_now().await;
    println!("\nManual refresh: generation {}, complete = {}", report.generation, report.is_complete());

    let frames = session.shutdown().await;
    let (restricted, statics, animated) = surface.counts();
    println!(
        "\nWalk hit hazards on {hazard_drops}/{WALK_STEPS} drops; {} notifications sent",
        notifier.sent()
    );
    println!("Layers pushed: {restricted} restricted, {statics} static, {animated} animated ({frames} frames)");
    Ok(())
}

/// Simulate a full drag gesture ending at `point`.  Returns `true` if the
/// drop raised a hazard alert.
async fn drag_and_drop(session: &mut Session, point: GeoPoint) -> bool {
    let marker = session.controller_mut();
    let from = marker.position();
    marker.begin_drag();
    marker.drag_to(GeoPoint::new((from.lon + point.lon) / 2.0, (from.lat + point.lat) / 2.0));
    let outcome = marker.drop_at(point).await;
    if outcome.dispatch.failed > 0 {
        println!("  ({} of {} notifications failed)", outcome.dispatch.failed, outcome.dispatch.attempted);
    }
    outcome.alert.is_hazard()
}
