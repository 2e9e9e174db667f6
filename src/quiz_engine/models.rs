use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// One term pair of the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Term shown to the user.
    pub prompt: String,
    /// The correct choice. Unique within a store.
    pub answer: String,
    /// Secondary translation, display only; never affects scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<String>,
}

impl VocabularyEntry {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        VocabularyEntry {
            prompt: prompt.into(),
            answer: answer.into(),
            auxiliary: None,
        }
    }

    pub fn with_auxiliary(mut self, auxiliary: impl Into<String>) -> Self {
        self.auxiliary = Some(auxiliary.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub total_questions: usize,
    pub option_count: usize,
    /// `Some` makes question order and option order reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            total_questions: 20,
            option_count: 4,
            rng_seed: None,
        }
    }
}

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total_questions(mut self, total_questions: usize) -> Self {
        self.total_questions = total_questions;
        self
    }

    pub fn with_option_count(mut self, option_count: usize) -> Self {
        self.option_count = option_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidConfig` for a zero-length quiz or fewer
    /// than two options per question.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.total_questions == 0 {
            return Err(QuizError::InvalidConfig("total_questions must be at least 1"));
        }
        if self.option_count < 2 {
            return Err(QuizError::InvalidConfig("option_count must be at least 2"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
}

impl SessionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::NotStarted => "not started",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Completed  => "completed",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-question sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerState {
    Pending,
    Revealed,
}

/// Mutable session record, owned by [`QuizSession`](crate::QuizSession).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub question_index: usize,
    pub score: usize,
    pub questions: Vec<VocabularyEntry>,
    pub selected_answer: Option<String>,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Questions and answers
// ---------------------------------------------------------------------------

/// A vocabulary entry paired with its shuffled answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the session.
    pub number: usize,
    pub entry: VocabularyEntry,
    pub options: Vec<String>,
}

impl Question {
    pub fn prompt(&self) -> &str {
        &self.entry.prompt
    }

    pub fn correct_answer(&self) -> &str {
        &self.entry.answer
    }

    /// # Errors
    ///
    /// Returns `QuizError::UnknownOption` when `choice` was not offered.
    pub fn check_option(&self, choice: &str) -> Result<(), QuizError> {
        if self.options.iter().any(|o| o == choice) {
            Ok(())
        } else {
            Err(QuizError::UnknownOption(choice.to_string()))
        }
    }
}

/// Outcome of the first submission for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub chosen: String,
    pub correct_answer: String,
    pub prompt: String,
    pub auxiliary: Option<String>,
    /// False when the choice was not among the offered options.
    pub known_option: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the active question; 0 before the first one.
    pub question_number: usize,
    pub total: usize,
    pub score: usize,
    pub answered: usize,
    pub percent_complete: u32,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTier {
    Perfect,
    Excellent,
    Good,
    NeedsWork,
    Poor,
}

impl fmt::Display for ResultTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultTier::Perfect   => "Perfect",
            ResultTier::Excellent => "Excellent",
            ResultTier::Good      => "Good",
            ResultTier::NeedsWork => "Needs Work",
            ResultTier::Poor      => "Poor",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultReport {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub color: String,
}

// ---------------------------------------------------------------------------
// Engine output
// ---------------------------------------------------------------------------

/// What the presentation layer should show after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    QuestionPresented { question: Question, progress: Progress },
    Completed(ResultReport),
}

/// Immutable picture of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub phase: SessionPhase,
    pub progress: Progress,
    pub question: Option<Question>,
    pub answer_state: Option<AnswerState>,
    pub feedback: Option<AnswerFeedback>,
    pub report: Option<ResultReport>,
}
