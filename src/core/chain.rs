use crate::domain::model::DecodeResult;
use crate::domain::ports::Decoder;

/// Runs `first`, then feeds its output to `second`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Decoder, B: Decoder> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Decoder, B: Decoder> Decoder for Chain<A, B> {
    fn name(&self) -> &'static str {
        self.second.name()
    }

    fn decode(&self, input: &str) -> String {
        self.decode_result(input).decoded
    }

    // 保留第一階段的輸出，輸出時要顯示
    fn decode_result(&self, input: &str) -> DecodeResult {
        let intermediate = self.first.decode(input);
        tracing::debug!(
            "🔗 {} produced '{}', handing over to {}",
            self.first.name(),
            intermediate,
            self.second.name()
        );
        let decoded = self.second.decode(&intermediate);
        DecodeResult::new(input, decoded).with_intermediate(intermediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::caesar::CaesarSolver;
    use crate::core::octal::OctalDecoder;

    #[test]
    fn test_octal_output_is_caesar_solved() {
        // "wkh" 的八進位碼
        let chain = Chain::new(OctalDecoder, CaesarSolver::new());
        assert_eq!(chain.decode("167 153 150"), "the");
        assert_eq!(chain.name(), "caesar");
    }

    #[test]
    fn test_result_keeps_first_stage_output() {
        let chain = Chain::new(OctalDecoder, CaesarSolver::new());
        let result = chain.decode_result("167 153 150");

        assert_eq!(result.original, "167 153 150");
        assert_eq!(result.intermediate.as_deref(), Some("wkh"));
        assert_eq!(result.decoded, "the");
    }

    #[test]
    fn test_single_decoder_has_no_intermediate() {
        let result = OctalDecoder.decode_result("150,151");
        assert_eq!(result.decoded, "hi");
        assert_eq!(result.intermediate, None);
    }
}
