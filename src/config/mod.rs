#[cfg(feature = "cli")]
pub mod args;
pub mod cli;
pub mod settings;
