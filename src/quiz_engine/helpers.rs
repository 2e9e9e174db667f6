//! Small builders shared by the session engine.
//!
//! Option assembly, feedback wording and progress arithmetic live here so
//! `session.rs` reads as the state machine only.

use rand::Rng;

use crate::quiz_engine::{
    models::{AnswerFeedback, Progress, VocabularyEntry},
    shuffle::shuffle,
};

/// Correct answer plus distractor answers, shuffled independently.
pub fn answer_options<R: Rng>(
    entry: &VocabularyEntry,
    distractors: &[VocabularyEntry],
    rng: &mut R,
) -> Vec<String> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(entry.answer.clone());
    options.extend(distractors.iter().map(|d| d.answer.clone()));
    shuffle(&mut options, rng);
    options
}

/// Display line for the feedback panel.
pub fn feedback_message(entry: &VocabularyEntry, is_correct: bool) -> String {
    if is_correct {
        format!("Correct! \"{}\" → \"{}\"", entry.prompt, entry.answer)
    } else {
        format!("Incorrect. The correct answer is: \"{}\"", entry.answer)
    }
}

/// Build the feedback value for one submission.
pub fn feedback(
    entry: &VocabularyEntry,
    chosen: &str,
    is_correct: bool,
    known_option: bool,
) -> AnswerFeedback {
    AnswerFeedback {
        is_correct,
        chosen: chosen.to_string(),
        correct_answer: entry.answer.clone(),
        prompt: entry.prompt.clone(),
        auxiliary: entry.auxiliary.clone(),
        known_option,
        message: feedback_message(entry, is_correct),
    }
}

/// `question_number` is 1-based; 0 means no question shown yet.
pub fn progress(question_number: usize, total: usize, score: usize, answered: usize) -> Progress {
    let percent_complete = if total == 0 {
        0
    } else {
        let done = question_number.min(total) as u64;
        ((200 * done + total as u64) / (2 * total as u64)) as u32
    };
    Progress {
        question_number,
        total,
        score,
        answered,
        percent_complete,
    }
}
