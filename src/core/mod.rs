pub mod caesar;
pub mod chain;
pub mod dictionary;
pub mod dispatcher;
pub mod engine;
pub mod key_shift;
pub mod morse;
pub mod octal;
pub mod scorer;
pub mod shift;

pub use crate::domain::model::{
    Candidate, Command, DecodeResult, DispatchReport, Score, ShiftAmount,
};
pub use crate::domain::ports::{Decoder, LineSource};
pub use crate::utils::error::Result;
