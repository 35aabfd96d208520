use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use primehunt::{
    ConfigWarning, DEFAULT_CONFIG_PATH, Delivery, Distribution, SearchConfig, Settings,
};

/// How integers are handed out to workers.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionArg {
    /// One contiguous sub-range per worker, computed before the run.
    Static,
    /// A shared atomic cursor every worker claims from.
    Dynamic,
}

impl From<DistributionArg> for Distribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Static => Self::Static,
            DistributionArg::Dynamic => Self::Dynamic,
        }
    }
}

/// How found primes are reported.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryArg {
    /// Print each prime the moment it is found.
    Immediate,
    /// Collect everything, then print once, sorted by value.
    Buffered,
}

impl From<DeliveryArg> for Delivery {
    fn from(arg: DeliveryArg) -> Self {
        match arg {
            DeliveryArg::Immediate => Self::Immediate,
            DeliveryArg::Buffered => Self::Buffered,
        }
    }
}

/// Command-line options for the `primehunt` binary.
///
/// Values are layered, lowest precedence first: built-in defaults, the
/// configuration file, environment variables (including a `.env` file), and
/// finally flags. `threads` and `max_number` only override the file when they
/// are actually given.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "primehunt",
    version,
    about = "Find every prime in [2, max_number] with a pool of worker threads"
)]
pub struct CliArgs {
    /// Path of the `key = value` configuration file.
    ///
    /// Created with the defaults (`threads = 4`, `max_number = 100000`) if it
    /// does not exist.
    ///
    /// Environment variable: `PRIMEHUNT_CONFIG`
    #[arg(long, env = "PRIMEHUNT_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Number of worker threads. Overrides `threads` from the file.
    ///
    /// Environment variable: `PRIMEHUNT_THREADS`
    #[arg(long, env = "PRIMEHUNT_THREADS", allow_negative_numbers = true)]
    pub threads: Option<i64>,

    /// Largest integer to test. Overrides `max_number` from the file.
    ///
    /// Environment variable: `PRIMEHUNT_MAX_NUMBER`
    #[arg(long, env = "PRIMEHUNT_MAX_NUMBER", allow_negative_numbers = true)]
    pub max_number: Option<i64>,

    /// Work distribution strategy.
    ///
    /// Environment variable: `PRIMEHUNT_DISTRIBUTION`
    #[arg(long, env = "PRIMEHUNT_DISTRIBUTION", value_enum, default_value_t = DistributionArg::Static)]
    pub distribution: DistributionArg,

    /// Result delivery strategy.
    ///
    /// Environment variable: `PRIMEHUNT_DELIVERY`
    #[arg(long, env = "PRIMEHUNT_DELIVERY", value_enum, default_value_t = DeliveryArg::Immediate)]
    pub delivery: DeliveryArg,
}

/// Fully resolved and validated configuration of one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub search: SearchConfig,
    pub config_path: PathBuf,
    /// Recoverable problems found in the configuration file.
    pub warnings: Vec<ConfigWarning>,
}

impl TryFrom<CliArgs> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let loaded = Settings::load_or_create(&args.config).with_context(|| {
            format!("failed to load configuration from {}", args.config.display())
        })?;

        let settings = Settings {
            threads: args.threads.unwrap_or(loaded.settings.threads),
            max_number: args.max_number.unwrap_or(loaded.settings.max_number),
        };

        let search = SearchConfig::try_from(settings)
            .context("refusing to start with an invalid configuration")?
            .distribution(args.distribution.into())
            .delivery(args.delivery.into());

        Ok(Self {
            search,
            config_path: args.config,
            warnings: loaded.warnings,
        })
    }
}

/// Resolves `args` into a [`RunConfig`], logging a rejected configuration at
/// `error` level instead of failing. `None` means the run must not start.
pub fn resolve_or_report(args: CliArgs) -> Option<RunConfig> {
    match RunConfig::try_from(args) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::error!("{err:#}");
            None
        }
    }
}
