use thiserror::Error;

/// Errors emitted by the quiz engine and the vocabulary store.
///
/// None of these are fatal to a running session; the worst outcome is a
/// shorter quiz or fewer options than configured.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("vocabulary has {available} eligible entries, {requested} requested")]
    InsufficientVocabulary { requested: usize, available: usize },
    #[error("cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("`{0}` is not one of the offered options")]
    UnknownOption(String),
    #[error("vocabulary is empty")]
    EmptyVocabulary,
    #[error("answer `{0}` appears more than once in the vocabulary")]
    DuplicateAnswer(String),
    #[error("invalid quiz config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
