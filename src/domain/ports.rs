use crate::domain::model::DecodeResult;
use crate::utils::error::Result;

/// A pure line-to-line decoding step. The dispatcher shares one instance
/// across all of its line tasks.
pub trait Decoder: Send + Sync {
    fn name(&self) -> &'static str;
    fn decode(&self, input: &str) -> String;

    /// Decodes `input` and keeps it alongside the result.
    fn decode_result(&self, input: &str) -> DecodeResult {
        DecodeResult::new(input, self.decode(input))
    }
}

pub trait LineSource: Send + Sync {
    fn read_lines(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}
