use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::domain::models::Cancelled;

/// Fixed-duration waits that end early when the run is interrupted
#[derive(Clone)]
pub struct Pacer {
    cancel: CancellationToken,
}

impl Pacer {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Fails once the run has been interrupted; called between steps.
    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.cancel.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    pub async fn pause(&self, duration: Duration) -> Result<(), Cancelled> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Cancelled),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= expected && elapsed <= expected + Duration::from_millis(10),
            "elapsed {:?}, expected {:?}",
            elapsed,
            expected
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_runs_to_completion() {
        let pacer = Pacer::new(CancellationToken::new());
        let start = Instant::now();

        assert_eq!(pacer.pause(Duration::from_secs(660)).await, Ok(()));
        assert_elapsed(start, Duration::from_secs(660));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_ends_on_interrupt() {
        let token = CancellationToken::new();
        let pacer = Pacer::new(token.clone());
        let start = Instant::now();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            token.cancel();
        });

        assert_eq!(pacer.pause(Duration::from_secs(660)).await, Err(Cancelled));
        assert_elapsed(start, Duration::from_secs(5));
    }

    #[test]
    fn test_checkpoint() {
        let token = CancellationToken::new();
        let pacer = Pacer::new(token.clone());
        assert_eq!(pacer.checkpoint(), Ok(()));

        token.cancel();
        assert_eq!(pacer.checkpoint(), Err(Cancelled));
    }
}
