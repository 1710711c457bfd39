//! Quiz module - the onboarding wizard state machine and submission service.

mod quiz_model;
mod quiz_service;
mod quiz_traits;

pub use quiz_model::{ActiveView, QuizAnswers, QuizOutcome, QuizResults, QuizStep, QuizWizard};
pub use quiz_service::QuizService;
pub use quiz_traits::{GenerationPacer, NoPacer, QuizServiceTrait, SleepPacer};
