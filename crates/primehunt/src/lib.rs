//! # primehunt
//!
//! A multi-threaded search for every prime in `[2, max_number]`.
//!
//! A run is a pool of OS threads that share two collaborators:
//!
//! - a [`WorkSource`] deciding which integers each worker tests
//!   ([`StaticPartition`] or [`DynamicClaim`]), and
//! - a [`ResultSink`] deciding how found primes are reported
//!   ([`ImmediateEmit`] or [`BufferedCollect`]).
//!
//! Any distribution can be paired with any delivery. Whatever the pairing,
//! every integer in the range is tested by exactly one worker and every prime
//! is reported exactly once.
//!
//! ## Example
//!
//! ```
//! use primehunt::{Distribution, Search, SearchConfig};
//!
//! let config = SearchConfig::new(4, 100)
//!     .unwrap()
//!     .distribution(Distribution::Dynamic);
//!
//! let mut out = Vec::new();
//! let report = Search::new(config).run(&mut out).unwrap();
//! assert_eq!(report.primes_found(), 25);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 25);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit spans and events through the `tracing` crate
//! - `parking-lot`: use `parking_lot` mutexes, which never poison
//! - `cache-padded`: pad the shared claim cursor to its own cache line

mod config;
mod error;
mod finding;
pub(crate) mod mutex;
mod oracle;
mod range;
mod search;
mod sink;
mod source;
mod time;
mod worker;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::finding::*;
pub use crate::oracle::*;
pub use crate::range::*;
pub use crate::search::*;
pub use crate::sink::*;
pub use crate::source::*;
pub use crate::time::*;
pub use crate::worker::*;
