use log::{debug, error, warn};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::quiz_model::{ActiveView, QuizOutcome, QuizResults, QuizStep, QuizWizard};
use super::quiz_traits::{GenerationPacer, QuizServiceTrait};
use crate::constants::{QUIZ_RESULTS_KEY, USER_PROFILE_KEY};
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};
use crate::goals::GoalCard;
use crate::profiles::{NewUserProfile, UserProfile};
use crate::store::KeyValueStore;

/// Service that turns a completed quiz wizard into persisted records.
///
/// The profile and the quiz results are written together or not at all: the
/// store has no transactions, so a failed second write removes the first
/// key before the error is surfaced.
pub struct QuizService {
    store: Arc<dyn KeyValueStore>,
    event_sink: Arc<dyn DomainEventSink>,
    pacer: Arc<dyn GenerationPacer>,
}

impl QuizService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        event_sink: Arc<dyn DomainEventSink>,
        pacer: Arc<dyn GenerationPacer>,
    ) -> Self {
        QuizService {
            store,
            event_sink,
            pacer,
        }
    }

    fn persist(&self, profile: &UserProfile, results: &QuizResults) -> Result<()> {
        let profile_raw = serde_json::to_string(profile)?;
        let results_raw = serde_json::to_string(results)?;

        self.store.set(USER_PROFILE_KEY, &profile_raw)?;
        if let Err(e) = self.store.set(QUIZ_RESULTS_KEY, &results_raw) {
            // Compensate so no partial state is left behind.
            if let Err(rollback) = self.store.remove(USER_PROFILE_KEY) {
                error!("Rollback of {USER_PROFILE_KEY} after failed results write also failed: {rollback}");
            }
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl QuizServiceTrait for QuizService {
    async fn submit(&self, wizard: &mut QuizWizard) -> Result<QuizOutcome> {
        // The terminal `Next` from the timeline step enters Generating; a
        // wizard already in Generating (caller drove the transition) is
        // accepted as-is.
        if wizard.step() == QuizStep::Timeline && !wizard.next() {
            return Err(Error::Validation(ValidationError::MissingField(
                "timeline".to_string(),
            )));
        }
        if wizard.step() != QuizStep::Generating {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Quiz is not ready for submission (state {:?})",
                wizard.step()
            ))));
        }

        let (focus, target_amount, timeline) = wizard.complete_answers().ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("focus".to_string()))
        })?;

        let new_profile = NewUserProfile {
            primary_focus: focus,
            target_amount,
            timeline,
        };
        new_profile.validate()?;

        let profile = new_profile.into_profile(Utc::now());
        let card = GoalCard::from_quiz(focus, target_amount, timeline);
        let results = QuizResults {
            goal_cards: vec![card],
            user_profile: profile.clone(),
        };

        debug!("Persisting quiz submission for {}", profile.user_id);
        if let Err(e) = self.persist(&profile, &results) {
            // Surfaced as retryable; the wizard stays on the last question.
            wizard.abort_generation();
            return Err(e);
        }

        // The profile is durable before the caller is asked to navigate;
        // the pacer only preserves the user-facing generation pause.
        self.pacer.pace().await;
        wizard.finish();

        self.event_sink
            .emit(DomainEvent::profile_saved(profile.user_id.clone()));
        self.event_sink
            .emit(DomainEvent::goal_cards_generated(results.goal_cards.len()));

        Ok(QuizOutcome {
            user_profile: profile,
            goal_cards: results.goal_cards,
            next_view: ActiveView::DocumentIntake,
        })
    }

    fn get_results(&self) -> Result<Option<QuizResults>> {
        let raw = match self.store.get(QUIZ_RESULTS_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str::<QuizResults>(&raw) {
            Ok(results) => Ok(Some(results)),
            Err(e) => {
                warn!("Stored quiz results are malformed, treating as absent: {e}");
                Ok(None)
            }
        }
    }

    fn clear_results(&self) -> Result<()> {
        self.store.remove(QUIZ_RESULTS_KEY)?;
        self.store.remove(USER_PROFILE_KEY)?;
        self.event_sink.emit(DomainEvent::ProfileCleared);
        Ok(())
    }
}
