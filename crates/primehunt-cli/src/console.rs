//! Human-readable lines printed around the result stream.

use core::time::Duration;
use std::io::{self, Write};

use primehunt::{Delivery, Distribution, SearchConfig, Timestamp};

/// Number naming a distribution and delivery pairing in the banner, `1..=4`.
#[must_use]
pub const fn variant(distribution: Distribution, delivery: Delivery) -> u8 {
    match (distribution, delivery) {
        (Distribution::Static, Delivery::Immediate) => 1,
        (Distribution::Static, Delivery::Buffered) => 2,
        (Distribution::Dynamic, Delivery::Immediate) => 3,
        (Distribution::Dynamic, Delivery::Buffered) => 4,
    }
}

/// Writes the banner naming the variant, the strategies and the run
/// parameters.
pub fn write_banner<W: Write>(
    out: &mut W,
    config: &SearchConfig,
    started_at: Timestamp,
) -> io::Result<()> {
    let (distribution, delivery) = config.strategy();
    writeln!(out, "--- Variant {} ---", variant(distribution, delivery))?;
    writeln!(out, "--- {distribution} ---")?;
    writeln!(out, "--- {delivery} ---")?;
    writeln!(out, "Run started at: {started_at}")?;
    writeln!(
        out,
        "Configuration: {} threads | search up to {}.",
        config.workers(),
        config.max_number()
    )?;
    if delivery == Delivery::Buffered {
        writeln!(out, "Searching... (This may take a moment)")?;
    }
    writeln!(out)?;
    out.flush()
}

/// Writes the closing lines once every worker has been joined.
///
/// Buffered runs already announced the join before their sorted list, so only
/// immediate runs repeat it here.
pub fn write_trailer<W: Write>(
    out: &mut W,
    delivery: Delivery,
    finished_at: Timestamp,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(out)?;
    if delivery == Delivery::Immediate {
        writeln!(out, "All threads finished.")?;
    }
    writeln!(out, "Run finished at: {finished_at}")?;
    writeln!(
        out,
        "Total execution time: {:.3} seconds",
        elapsed.as_secs_f64()
    )?;
    out.flush()
}
