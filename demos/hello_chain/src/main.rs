//! Demo pipeline for the `upshot` chaining surface.
//!
//! This binary is the hosting-code side of the library's contract: it owns
//! observability (a `tracing-subscriber` installed here, never by the
//! library) and the crossing from outcome values into the host error
//! channel at the very end of the run.

use color_eyre::eyre::eyre;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use upshot::{Outcome, Status};

/// Parses a raw meter reading.
fn parse_reading(raw: &str) -> Outcome<u32> {
    raw.trim().parse().map_or_else(
        |_| Outcome::fail(format!("not a reading: {raw:?}")),
        Outcome::success,
    )
}

/// Accepts readings up to the meter's ceiling, clamping the rest with a
/// caveat.
fn clamp(reading: u32) -> Outcome<u32> {
    const CEILING: u32 = 100;
    if reading > CEILING {
        Outcome::warn(CEILING, format!("clamped {reading} to {CEILING}"))
    } else {
        Outcome::success(reading)
    }
}

fn report(raw: &str, outcome: &Outcome<u32>) {
    match outcome.status() {
        Status::Success => info!(raw, value = *outcome.value(), "reading accepted"),
        Status::Warning => warn!(
            raw,
            value = *outcome.value(),
            caveat = outcome.message(),
            "reading accepted with caveat"
        ),
        Status::Failure => warn!(raw, reason = outcome.message(), "reading rejected"),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for raw in ["17", "900", "banana"] {
        let outcome = parse_reading(raw).on_success(clamp);
        report(raw, &outcome);
    }

    // Strict rerun: the clamp caveat now halts the pipeline instead.
    let strict = parse_reading("900")
        .on_success(clamp)
        .on_success_strict(Outcome::success);
    report("900 (strict)", &strict);

    let total = parse_reading("41")
        .map_success(|reading| reading + 1)
        .ok_or_else(|| eyre!("no reading survived the pipeline"))?;
    info!(total, "pipeline complete");
    Ok(())
}
