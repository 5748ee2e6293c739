use crate::domain::model::DispatchReport;
use crate::domain::ports::Decoder;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Decodes every line on its own blocking task and joins them all.
///
/// Results come back in completion order. Without a concurrency limit every
/// line gets a task immediately; with one, a semaphore caps how many decode
/// at once.
pub struct LineDispatcher<D: Decoder + 'static> {
    decoder: Arc<D>,
    max_concurrency: Option<usize>,
}

impl<D: Decoder + 'static> LineDispatcher<D> {
    pub fn new(decoder: Arc<D>) -> Self {
        Self {
            decoder,
            max_concurrency: None,
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.max_concurrency = max_concurrency.map(|limit| limit.max(1));
        self
    }

    pub async fn dispatch(&self, lines: Vec<String>) -> Result<DispatchReport> {
        let total = lines.len();
        let limiter = self.max_concurrency.map(|limit| Arc::new(Semaphore::new(limit)));
        let mut join_set = JoinSet::new();

        tracing::debug!(
            "Dispatching {} lines to {} (limit: {:?})",
            total,
            self.decoder.name(),
            self.max_concurrency
        );

        for line in lines {
            let permit = match &limiter {
                Some(semaphore) => Some(semaphore.clone().acquire_owned().await?),
                None => None,
            };
            let decoder = Arc::clone(&self.decoder);
            join_set.spawn_blocking(move || {
                let _permit = permit;
                decoder.decode_result(&line)
            });
        }

        let mut report = DispatchReport {
            results: Vec::with_capacity(total),
            failed: 0,
        };
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(result) => report.results.push(result),
                Err(e) => {
                    tracing::error!("❌ Line task failed: {}", e);
                    report.failed += 1;
                }
            }
        }

        tracing::debug!(
            "Joined {} of {} line tasks",
            report.results.len(),
            total
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::caesar::{solve, CaesarSolver};
    use crate::domain::model::DecodeResult;
    use std::collections::HashSet;

    struct PanicsOn(&'static str);

    impl Decoder for PanicsOn {
        fn name(&self) -> &'static str {
            "panics-on"
        }

        fn decode(&self, input: &str) -> String {
            if input == self.0 {
                panic!("cannot decode {}", input);
            }
            input.to_uppercase()
        }
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_pairs_survive_any_completion_order() {
        let dispatcher = LineDispatcher::new(Arc::new(CaesarSolver::new()));
        let report = dispatcher.dispatch(lines(&["wkh", "fdw"])).await.unwrap();

        let got: HashSet<DecodeResult> = report.results.into_iter().collect();
        let expected: HashSet<DecodeResult> = [
            DecodeResult::new("wkh", "the"),
            DecodeResult::new("fdw", solve("fdw")),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_report() {
        let dispatcher = LineDispatcher::new(Arc::new(CaesarSolver::new()));
        let report = dispatcher.dispatch(Vec::new()).await.unwrap();
        assert!(report.results.is_empty());
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn test_failing_line_does_not_hide_others() {
        let dispatcher = LineDispatcher::new(Arc::new(PanicsOn("bad")));
        let report = dispatcher
            .dispatch(lines(&["one", "bad", "two"]))
            .await
            .unwrap();

        assert_eq!(report.failed, 1);
        let decoded: HashSet<String> = report.results.into_iter().map(|r| r.decoded).collect();
        assert_eq!(decoded, HashSet::from(["ONE".to_string(), "TWO".to_string()]));
    }

    #[tokio::test]
    async fn test_bounded_dispatch_decodes_every_line() {
        let dispatcher =
            LineDispatcher::new(Arc::new(CaesarSolver::new())).with_max_concurrency(Some(2));
        let input: Vec<String> = (0..10).map(|i| format!("wkh {}", i)).collect();
        let report = dispatcher.dispatch(input).await.unwrap();

        assert_eq!(report.results.len(), 10);
        assert!(report.results.iter().all(|r| r.decoded.starts_with("the ")));
    }
}
