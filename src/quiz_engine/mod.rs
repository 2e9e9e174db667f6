//! Core quiz engine: vocabulary, question building, scoring and results.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: entries, config, questions, feedback, reports |
//! | `error`      | `QuizError` taxonomy |
//! | `shuffle`    | Fisher-Yates shuffle and sampling without replacement |
//! | `vocabulary` | Immutable word list with the built-in family-members set |
//! | `tiering`    | Percentage rounding and the five result tiers |
//! | `helpers`    | Option assembly, feedback wording, progress arithmetic |
//! | `session`    | `QuizSession` state machine |

pub mod error;
pub mod helpers;
pub mod models;
pub mod session;
pub mod shuffle;
pub mod tiering;
pub mod vocabulary;

pub use error::QuizError;
pub use models::{
    AnswerFeedback, AnswerState, Progress, Question, QuizConfig, QuizEvent, QuizSnapshot,
    ResultReport, ResultTier, SessionPhase, SessionState, VocabularyEntry,
};
pub use session::QuizSession;
pub use tiering::compute_result;
pub use vocabulary::VocabularyStore;
