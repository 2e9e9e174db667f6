//! # vocab_quiz
//!
//! A small, fully offline multiple-choice vocabulary quiz engine.
//!
//! The engine presents a prompt term, offers shuffled answer options (one
//! correct, the rest distractors drawn from the same word list), scores the
//! first answer per question, and produces a tiered result report at the end.
//! Rendering and input are left to the caller: every operation returns an
//! immutable value the presentation layer can draw.
//!
//! ## How it works
//!
//! 1. Build a [`VocabularyStore`]: the compiled-in Polish family-members
//!    list via [`VocabularyStore::builtin`], or your own via
//!    [`VocabularyStore::new`] / [`VocabularyStore::from_json`].
//! 2. Create a [`QuizSession`] with a [`QuizConfig`] (question count, options
//!    per question, optional RNG seed).
//! 3. Drive it with [`QuizSession::start`], [`QuizSession::submit_answer`],
//!    [`QuizSession::advance`] and [`QuizSession::restart`]. Call
//!    [`QuizSession::snapshot`] whenever the UI needs a full picture.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces question order and
//!   option order exactly, which is useful for tests.
//! - **Forgiving**: repeat submissions are ignored, unknown choices count as
//!   wrong, and a vocabulary smaller than the configured quiz just makes the
//!   quiz shorter.
//! - **Five result tiers** (Perfect / Excellent / Good / Needs Work / Poor)
//!   chosen from the rounded percentage.
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_quiz::{QuizConfig, QuizEvent, QuizSession};
//!
//! let mut session = QuizSession::with_builtin(
//!     QuizConfig::new().with_total_questions(5).with_seed(42),
//! ).unwrap();
//!
//! let mut event = session.start();
//! while let QuizEvent::QuestionPresented { question, .. } = &event {
//!     println!("{} ?", question.prompt());
//!     let feedback = session.submit_answer(&question.options[0]).unwrap();
//!     println!("  {}", feedback.message);
//!     event = session.advance().unwrap();
//! }
//!
//! if let QuizEvent::Completed(report) = event {
//!     println!("{}: {}/{} ({}%)", report.title, report.score, report.total, report.percentage);
//! }
//! ```

pub mod quiz_engine;
pub mod render_adapter;

// Convenience re-exports so callers can use `vocab_quiz::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    compute_result, AnswerFeedback, AnswerState, Progress, Question, QuizConfig, QuizError,
    QuizEvent, QuizSession, QuizSnapshot, ResultReport, ResultTier, SessionPhase, SessionState,
    VocabularyEntry, VocabularyStore,
};
pub use render_adapter::to_view_json;
