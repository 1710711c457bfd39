//! Quiz wizard domain models and state machine.

use serde::{Deserialize, Serialize};

use crate::constants::{
    TARGET_AMOUNT_DEFAULT, TARGET_AMOUNT_MAX, TARGET_AMOUNT_MIN, TARGET_AMOUNT_STEP,
};
use crate::goals::GoalCard;
use crate::profiles::{Focus, Timeline, UserProfile};

/// Wizard states. The three question steps are followed by a transient
/// generation state and a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    Focus,
    Amount,
    Timeline,
    Generating,
    Done,
}

impl QuizStep {
    /// 1-based step number for the three question steps.
    pub fn number(&self) -> Option<u8> {
        match self {
            QuizStep::Focus => Some(1),
            QuizStep::Amount => Some(2),
            QuizStep::Timeline => Some(3),
            QuizStep::Generating | QuizStep::Done => None,
        }
    }
}

/// The user's answers, collected across the three steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub focus: Option<Focus>,
    pub target_amount: f64,
    pub timeline: Option<Timeline>,
}

impl Default for QuizAnswers {
    fn default() -> Self {
        QuizAnswers {
            focus: None,
            target_amount: TARGET_AMOUNT_DEFAULT,
            timeline: None,
        }
    }
}

/// Persisted shape of the `quiz_results` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResults {
    pub goal_cards: Vec<GoalCard>,
    pub user_profile: UserProfile,
}

/// View the caller should activate after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// The document-intake view, where the user uploads statements.
    DocumentIntake,
}

/// Result of a successful quiz submission.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub user_profile: UserProfile,
    pub goal_cards: Vec<GoalCard>,
    /// Navigation request for the caller; the profile is already persisted
    /// by the time this is returned.
    pub next_view: ActiveView,
}

/// The three-step wizard state machine.
///
/// `next()` only advances when the current step's answer is present; a
/// blocked advance is a no-op, not an error (the UI disables the button).
/// `back()` never clears already-entered answers.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizWizard {
    step: QuizStep,
    answers: QuizAnswers,
}

impl Default for QuizWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizWizard {
    pub fn new() -> Self {
        QuizWizard {
            step: QuizStep::Focus,
            answers: QuizAnswers::default(),
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn select_focus(&mut self, focus: Focus) {
        self.answers.focus = Some(focus);
    }

    /// Records a slider interaction: the amount is clamped to the allowed
    /// range and snapped to the slider step, so any input sequence leaves a
    /// valid amount.
    pub fn set_target_amount(&mut self, amount: f64) {
        let snapped = (amount / TARGET_AMOUNT_STEP).round() * TARGET_AMOUNT_STEP;
        self.answers.target_amount = snapped.clamp(TARGET_AMOUNT_MIN, TARGET_AMOUNT_MAX);
    }

    pub fn select_timeline(&mut self, timeline: Timeline) {
        self.answers.timeline = Some(timeline);
    }

    /// Whether the current step's guard is satisfied.
    ///
    /// Step 2 always passes: the amount has a default and the setter keeps
    /// it positive.
    pub fn can_advance(&self) -> bool {
        match self.step {
            QuizStep::Focus => self.answers.focus.is_some(),
            QuizStep::Amount => self.answers.target_amount > 0.0,
            QuizStep::Timeline => self.answers.timeline.is_some(),
            QuizStep::Generating | QuizStep::Done => false,
        }
    }

    /// Advances to the next step. Returns whether the state changed.
    ///
    /// From the timeline step this enters `Generating`; the submission
    /// service performs the persistence and completes or rolls back the
    /// transition.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = match self.step {
            QuizStep::Focus => QuizStep::Amount,
            QuizStep::Amount => QuizStep::Timeline,
            QuizStep::Timeline => QuizStep::Generating,
            QuizStep::Generating | QuizStep::Done => return false,
        };
        true
    }

    /// Steps back from step 2 or 3. Answers are retained.
    pub fn back(&mut self) -> bool {
        self.step = match self.step {
            QuizStep::Amount => QuizStep::Focus,
            QuizStep::Timeline => QuizStep::Amount,
            _ => return false,
        };
        true
    }

    /// Complete answers, available once every step has been answered.
    pub fn complete_answers(&self) -> Option<(Focus, f64, Timeline)> {
        Some((
            self.answers.focus?,
            self.answers.target_amount,
            self.answers.timeline?,
        ))
    }

    /// Marks the generation as finished.
    pub(crate) fn finish(&mut self) {
        self.step = QuizStep::Done;
    }

    /// Returns to the timeline step after a failed persistence attempt.
    pub(crate) fn abort_generation(&mut self) {
        self.step = QuizStep::Timeline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let wizard = QuizWizard::new();
        assert_eq!(wizard.step(), QuizStep::Focus);
        assert_eq!(wizard.answers().target_amount, TARGET_AMOUNT_DEFAULT);
        assert!(wizard.answers().focus.is_none());
        assert!(wizard.answers().timeline.is_none());
    }

    #[test]
    fn test_next_blocked_without_focus() {
        let mut wizard = QuizWizard::new();
        assert!(!wizard.can_advance());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), QuizStep::Focus);
    }

    #[test]
    fn test_next_advances_after_focus() {
        let mut wizard = QuizWizard::new();
        wizard.select_focus(Focus::Home);
        assert!(wizard.next());
        assert_eq!(wizard.step(), QuizStep::Amount);
    }

    #[test]
    fn test_amount_step_never_blocks() {
        let mut wizard = QuizWizard::new();
        wizard.select_focus(Focus::Home);
        wizard.next();
        // No slider interaction at all: the default carries the step.
        assert!(wizard.can_advance());
        assert!(wizard.next());
        assert_eq!(wizard.step(), QuizStep::Timeline);
    }

    #[test]
    fn test_next_blocked_without_timeline() {
        let mut wizard = QuizWizard::new();
        wizard.select_focus(Focus::Retirement);
        wizard.next();
        wizard.next();
        assert!(!wizard.next());
        assert_eq!(wizard.step(), QuizStep::Timeline);
    }

    #[test]
    fn test_terminal_next_enters_generating() {
        let mut wizard = QuizWizard::new();
        wizard.select_focus(Focus::Retirement);
        wizard.next();
        wizard.next();
        wizard.select_timeline(Timeline::Long);
        assert!(wizard.next());
        assert_eq!(wizard.step(), QuizStep::Generating);
    }

    #[test]
    fn test_back_retains_answers() {
        let mut wizard = QuizWizard::new();
        wizard.select_focus(Focus::Emergency);
        wizard.next();
        wizard.set_target_amount(50_000.0);
        wizard.next();
        wizard.select_timeline(Timeline::Short);

        assert!(wizard.back());
        assert_eq!(wizard.step(), QuizStep::Amount);
        assert!(wizard.back());
        assert_eq!(wizard.step(), QuizStep::Focus);
        // Nothing was cleared on the way back.
        assert_eq!(wizard.answers().focus, Some(Focus::Emergency));
        assert_eq!(wizard.answers().target_amount, 50_000.0);
        assert_eq!(wizard.answers().timeline, Some(Timeline::Short));
    }

    #[test]
    fn test_back_is_noop_at_first_step() {
        let mut wizard = QuizWizard::new();
        assert!(!wizard.back());
        assert_eq!(wizard.step(), QuizStep::Focus);
    }

    #[test]
    fn test_set_target_amount_clamps_and_snaps() {
        let mut wizard = QuizWizard::new();

        wizard.set_target_amount(0.0);
        assert_eq!(wizard.answers().target_amount, TARGET_AMOUNT_MIN);

        wizard.set_target_amount(5_000_000.0);
        assert_eq!(wizard.answers().target_amount, TARGET_AMOUNT_MAX);

        wizard.set_target_amount(123_456.0);
        assert_eq!(wizard.answers().target_amount, 120_000.0);

        wizard.set_target_amount(-42.0);
        assert_eq!(wizard.answers().target_amount, TARGET_AMOUNT_MIN);
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(QuizStep::Focus.number(), Some(1));
        assert_eq!(QuizStep::Amount.number(), Some(2));
        assert_eq!(QuizStep::Timeline.number(), Some(3));
        assert_eq!(QuizStep::Generating.number(), None);
        assert_eq!(QuizStep::Done.number(), None);
    }
}
