use crate::config::GenerateConfig;
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;
use ulid36::{
    BasicMonoUlid36Generator, BasicUlid36Generator, RandSource, SystemClock, TimeSource,
    Ulid36Generator, decode_time, detect_prng, increment,
};

/// Writes `config.count` identifiers to `out`, one per line.
pub fn generate(config: &GenerateConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let rng = detect_prng(config.allow_insecure)?;
    tracing::debug!(?rng, monotonic = config.monotonic, "generating identifiers");

    if config.monotonic {
        emit(BasicMonoUlid36Generator::new(SystemClock, rng), config, out)
    } else {
        emit(BasicUlid36Generator::new(SystemClock, rng), config, out)
    }
}

fn emit<G, T, R>(generator: G, config: &GenerateConfig, out: &mut impl Write) -> anyhow::Result<()>
where
    G: Ulid36Generator<T, R>,
    T: TimeSource<u64>,
    R: RandSource<f64>,
{
    for _ in 0..config.count {
        let id = generator.generate(config.seed_time)?;
        writeln!(out, "{id}")?;
    }
    Ok(())
}

/// Writes `<id> <millis> <rfc3339>` for every identifier.
///
/// Stops at the first identifier that fails to decode.
pub fn decode(ids: &[String], out: &mut impl Write) -> anyhow::Result<()> {
    for raw in ids {
        let millis = decode_time(raw).with_context(|| format!("cannot decode {raw:?}"))?;
        writeln!(out, "{} {millis} {}", raw.to_ascii_lowercase(), rfc3339(millis))?;
    }
    Ok(())
}

/// Writes `digits + 1`.
pub fn increment_digits(digits: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let next = increment(digits).with_context(|| format!("cannot increment {digits:?}"))?;
    writeln!(out, "{next}")?;
    Ok(())
}

fn rfc3339(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map_or_else(
            || String::from("out-of-range"),
            |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
}
