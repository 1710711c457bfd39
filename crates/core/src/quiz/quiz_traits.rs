use std::time::Duration;

use async_trait::async_trait;

use crate::constants::GENERATION_PAUSE_MS;
use crate::errors::Result;
use crate::quiz::{QuizOutcome, QuizResults, QuizWizard};

/// Paces the user-facing "generating" phase of a quiz submission.
///
/// The UI shows a fixed two-second "generating" animation here. The pacer
/// keeps the ordering guarantee (profile persisted before the caller is
/// told to navigate) without hard-coding a sleep into the service, so tests
/// run synchronously.
#[async_trait]
pub trait GenerationPacer: Send + Sync {
    async fn pace(&self);
}

/// Production pacer backed by the tokio timer.
pub struct SleepPacer {
    duration: Duration,
}

impl SleepPacer {
    pub fn new(duration: Duration) -> Self {
        SleepPacer { duration }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        SleepPacer::new(Duration::from_millis(GENERATION_PAUSE_MS))
    }
}

#[async_trait]
impl GenerationPacer for SleepPacer {
    async fn pace(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Pacer that returns immediately, for tests.
#[derive(Clone, Default)]
pub struct NoPacer;

#[async_trait]
impl GenerationPacer for NoPacer {
    async fn pace(&self) {}
}

/// Trait for quiz service operations.
#[async_trait]
pub trait QuizServiceTrait: Send + Sync {
    /// Submits a completed wizard: persists the profile and goal card, paces
    /// the generation phase, and returns the navigation outcome.
    async fn submit(&self, wizard: &mut QuizWizard) -> Result<QuizOutcome>;

    /// Returns the stored quiz results, or `None` if absent or unreadable.
    fn get_results(&self) -> Result<Option<QuizResults>>;

    /// Removes the stored quiz results and profile.
    fn clear_results(&self) -> Result<()>;
}
