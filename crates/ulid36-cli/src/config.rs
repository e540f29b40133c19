use anyhow::bail;
use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};
use ulid36::TIME_MAX;

/// Upper bound for `generate --count`.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line interface of the `ulid36` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ulid36",
    version,
    about = "Generate, decode and increment base-36 identifiers"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print freshly generated identifiers, one per line.
    Generate(GenerateArgs),

    /// Print the timestamp encoded in each identifier.
    Decode {
        /// Identifiers to decode (case-insensitive).
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Print a base-36 numeral plus one.
    Increment {
        /// Digits from `0-9a-z` (case-insensitive).
        digits: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of identifiers to print.
    ///
    /// Environment variable: `ULID36_COUNT`
    #[arg(short = 'n', long, env = "ULID36_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Increment the random suffix instead of redrawing it when several
    /// identifiers share a millisecond.
    ///
    /// Environment variable: `ULID36_MONOTONIC`
    #[arg(short, long, env = "ULID36_MONOTONIC", value_parser = BoolishValueParser::new())]
    pub monotonic: bool,

    /// Use this time (Unix milliseconds) instead of the wall clock.
    ///
    /// Environment variable: `ULID36_SEED_TIME`
    #[arg(long, env = "ULID36_SEED_TIME")]
    pub seed_time: Option<u64>,

    /// Fall back to a non-cryptographic PRNG if no secure source is usable.
    ///
    /// Environment variable: `ULID36_ALLOW_INSECURE`
    #[arg(long, env = "ULID36_ALLOW_INSECURE", value_parser = BoolishValueParser::new())]
    pub allow_insecure: bool,
}

/// Validated settings for the `generate` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub count: usize,
    pub monotonic: bool,
    pub seed_time: Option<u64>,
    pub allow_insecure: bool,
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = anyhow::Error;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("ULID36_COUNT must be greater than 0");
        }

        if args.count > MAX_COUNT {
            bail!(
                "ULID36_COUNT ({}) exceeds the maximum of {}",
                args.count,
                MAX_COUNT
            );
        }

        if let Some(seed) = args.seed_time.filter(|&seed| seed > TIME_MAX) {
            bail!("ULID36_SEED_TIME ({seed}) exceeds the maximum of {TIME_MAX}");
        }

        Ok(Self {
            count: args.count,
            monotonic: args.monotonic,
            seed_time: args.seed_time,
            allow_insecure: args.allow_insecure,
        })
    }
}
