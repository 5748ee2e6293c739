use crate::core::dispatcher::LineDispatcher;
use crate::domain::model::{Command, DecodeResult, DispatchReport};
use crate::domain::ports::{Decoder, LineSource};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Outcome {
    Decoded(DecodeResult),
    File { path: String, report: DispatchReport },
    NoAction,
}

/// Wires a decoder to its line source and dispatcher, and runs one command.
pub struct SolverEngine<D: Decoder + 'static, L: LineSource> {
    decoder: Arc<D>,
    source: L,
    dispatcher: LineDispatcher<D>,
}

impl<D: Decoder + 'static, L: LineSource> SolverEngine<D, L> {
    pub fn new(decoder: D, source: L) -> Self {
        let decoder = Arc::new(decoder);
        Self {
            dispatcher: LineDispatcher::new(Arc::clone(&decoder)),
            decoder,
            source,
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.dispatcher = self.dispatcher.with_max_concurrency(max_concurrency);
        self
    }

    /// Runs on the caller's thread.
    pub fn solve_string(&self, text: &str) -> DecodeResult {
        self.decoder.decode_result(text)
    }

    pub async fn solve_file(&self, path: &str) -> Result<DispatchReport> {
        let lines = self.source.read_lines(path).await?;
        tracing::info!("📂 Read {} lines from {}", lines.len(), path);
        self.dispatcher.dispatch(lines).await
    }

    pub async fn run(&self, command: &Command) -> Result<Outcome> {
        match command {
            Command::SolveString(text) => {
                tracing::info!("🔍 Solving string with {}", self.decoder.name());
                Ok(Outcome::Decoded(self.solve_string(text)))
            }
            Command::SolveFile(path) => {
                tracing::info!("🔍 Solving file {} with {}", path, self.decoder.name());
                let report = self.solve_file(path).await?;
                if report.failed > 0 {
                    tracing::warn!("⚠️ {} lines could not be decoded", report.failed);
                }
                Ok(Outcome::File {
                    path: path.clone(),
                    report,
                })
            }
            Command::Undefined => {
                tracing::debug!("Undefined command, nothing to do");
                Ok(Outcome::NoAction)
            }
        }
    }
}
