//! Cipher-breaking utilities: a brute-force Caesar solver with English-likeness
//! scoring, plus Morse, octal and repeating-key decoders that share its line
//! dispatcher and CLI conventions.

#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalLines;
pub use crate::config::settings::{OutputFormat, SolverSettings};
pub use crate::core::caesar::{solve, CaesarSolver};
pub use crate::core::chain::Chain;
pub use crate::core::dictionary::Dictionary;
pub use crate::core::engine::{Outcome, SolverEngine};
pub use crate::core::morse::MorseDecoder;
pub use crate::core::octal::OctalDecoder;
pub use crate::core::shift::shift;
pub use crate::domain::model::{Command, DecodeResult};
pub use crate::domain::ports::Decoder;
pub use crate::utils::error::{Result, SolverError};
