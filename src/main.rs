//! isometry-search — console runner for the embedding search.
//!
//! Runs the reference configuration (compositions of length 9 summing to 12,
//! slot values at most 8) and prints one line per composition that admits a
//! witness:
//!
//! ```text
//! Valid embedding with y = <y-bitstring> and A = [a0, a1, ..., aK-1]
//! ```
//!
//! Compositions without a witness print nothing. Diagnostics go to stderr
//! via `tracing`; tune with e.g. `RUST_LOG=isometry_rs=debug`.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use isometry_rs::{Search, SearchParams};

fn main() -> isometry_rs::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "isometry_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let params = SearchParams::default();
    info!(
        composition_len = params.composition_len,
        target_sum = params.target_sum,
        max_value = params.max_value,
        "starting embedding search"
    );

    let search = Search::new(params)?;
    let witnesses = search.run_with(|witness| println!("{witness}"))?;

    info!(witnesses = witnesses.len(), "search finished");
    Ok(())
}
