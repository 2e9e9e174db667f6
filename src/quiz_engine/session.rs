//! Quiz session state machine.
//!
//! `NotStarted → InProgress → Completed`, with a per-question sub-state of
//! `Pending → Revealed`. The first submission for a question locks it; only
//! [`QuizSession::advance`] unlocks the next one.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

use crate::quiz_engine::{
    error::QuizError,
    helpers,
    models::{
        AnswerFeedback, AnswerState, Progress, Question, QuizConfig, QuizEvent, QuizSnapshot,
        ResultReport, SessionPhase, SessionState, VocabularyEntry,
    },
    shuffle::shuffle,
    tiering::compute_result,
    vocabulary::VocabularyStore,
};

/// One independent quiz run over a vocabulary store.
#[derive(Debug, Clone)]
pub struct QuizSession {
    store: VocabularyStore,
    config: QuizConfig,
    rng: StdRng,
    phase: SessionPhase,
    state: SessionState,
    current: Option<Question>,
    feedback: Option<AnswerFeedback>,
    report: Option<ResultReport>,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::InvalidConfig` if `config` fails validation.
    pub fn new(store: VocabularyStore, config: QuizConfig) -> Result<Self, QuizError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(QuizSession {
            store,
            config,
            rng,
            phase: SessionPhase::NotStarted,
            state: SessionState::default(),
            current: None,
            feedback: None,
            report: None,
        })
    }

    /// Session over the compiled-in word list.
    ///
    /// # Errors
    ///
    /// Same as [`QuizSession::new`].
    pub fn with_builtin(config: QuizConfig) -> Result<Self, QuizError> {
        Self::new(VocabularyStore::builtin(), config)
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    pub fn report(&self) -> Option<&ResultReport> {
        self.report.as_ref()
    }

    /// `None` when no question is active.
    pub fn answer_state(&self) -> Option<AnswerState> {
        self.current.as_ref().map(|_| {
            if self.state.selected_answer.is_some() {
                AnswerState::Revealed
            } else {
                AnswerState::Pending
            }
        })
    }

    /// Fresh uniform permutation of the store, truncated to `total_questions`.
    pub fn build_question_sequence(&mut self, total_questions: usize) -> Vec<VocabularyEntry> {
        let mut entries = self.store.all();
        if total_questions > entries.len() {
            warn!(
                requested = total_questions,
                available = entries.len(),
                "vocabulary smaller than quiz length, shortening quiz"
            );
        }
        shuffle(&mut entries, &mut self.rng);
        entries.truncate(total_questions);
        entries
    }

    /// Start with the configured number of questions.
    pub fn start(&mut self) -> QuizEvent {
        self.start_with(self.config.total_questions)
    }

    /// Reset all state and begin a new run of `total_questions`.
    pub fn start_with(&mut self, total_questions: usize) -> QuizEvent {
        self.clear();
        self.state.questions = self.build_question_sequence(total_questions);
        self.phase = SessionPhase::InProgress;
        debug!(questions = self.state.questions.len(), "quiz started");

        if self.state.questions.is_empty() {
            return QuizEvent::Completed(self.complete());
        }
        self.present_next()
    }

    /// Same contract as [`QuizSession::start`].
    pub fn restart(&mut self) -> QuizEvent {
        debug!(
            question_index = self.state.question_index,
            score = self.state.score,
            "quiz restarted"
        );
        self.start()
    }

    /// Back to `NotStarted` with no active question.
    pub fn reset(&mut self) {
        self.clear();
        debug!("quiz reset");
    }

    /// (Re)display the active question.
    ///
    /// A pending question gets freshly generated options. A question that
    /// was already answered is returned as-is; it stays locked until
    /// [`QuizSession::advance`].
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when the session is not in progress.
    pub fn present_current_question(&mut self) -> Result<Question, QuizError> {
        if self.phase != SessionPhase::InProgress {
            return Err(self.invalid("present a question"));
        }
        if let (Some(question), Some(AnswerState::Revealed)) = (&self.current, self.answer_state()) {
            return Ok(question.clone());
        }
        self.prepare_question()
            .ok_or_else(|| self.invalid("present a question"))
    }

    /// Record the answer for the active question.
    ///
    /// Returns `None` when no question is active. A repeat submission for the
    /// same question changes nothing and returns the first feedback again.
    /// Choices that were never offered score as incorrect.
    pub fn submit_answer(&mut self, choice: &str) -> Option<AnswerFeedback> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        let question = self.current.as_ref()?;

        if let Some(first) = &self.feedback {
            debug!(choice, "answer already revealed, ignoring submission");
            return Some(first.clone());
        }

        let known_option = match question.check_option(choice) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "scoring as incorrect");
                false
            }
        };
        let is_correct = choice == question.correct_answer();
        let feedback = helpers::feedback(&question.entry, choice, is_correct, known_option);

        if is_correct {
            self.state.score += 1;
        }
        self.state.selected_answer = Some(choice.to_string());
        self.feedback = Some(feedback.clone());
        debug!(
            question = question.number,
            is_correct,
            score = self.state.score,
            "answer recorded"
        );
        Some(feedback)
    }

    /// Move past an answered question.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` when the session is not in progress or the active
    /// question has not been answered. State is left untouched.
    pub fn advance(&mut self) -> Result<QuizEvent, QuizError> {
        if self.phase != SessionPhase::InProgress {
            return Err(self.invalid("advance"));
        }
        if self.state.selected_answer.is_none() {
            return Err(QuizError::InvalidTransition {
                action: "advance",
                state: "awaiting an answer",
            });
        }

        self.state.question_index += 1;
        self.state.selected_answer = None;
        self.feedback = None;
        self.current = None;

        if self.state.question_index >= self.state.questions.len() {
            return Ok(QuizEvent::Completed(self.complete()));
        }
        Ok(self.present_next())
    }

    pub fn progress(&self) -> Progress {
        let total = self.state.questions.len();
        let answered_current = usize::from(self.state.selected_answer.is_some());
        let (number, answered) = match self.phase {
            SessionPhase::NotStarted => (0, 0),
            SessionPhase::InProgress => (
                self.state.question_index + 1,
                self.state.question_index + answered_current,
            ),
            SessionPhase::Completed  => (total, total),
        };
        helpers::progress(number, total, self.state.score, answered)
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            phase: self.phase,
            progress: self.progress(),
            question: self.current.clone(),
            answer_state: self.answer_state(),
            feedback: self.feedback.clone(),
            report: self.report.clone(),
        }
    }

    // ── internals ────────────────────────────────────────────────────────────

    fn clear(&mut self) {
        self.phase = SessionPhase::NotStarted;
        self.state = SessionState::default();
        self.current = None;
        self.feedback = None;
        self.report = None;
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            action,
            state: self.phase.as_str(),
        }
    }

    fn present_next(&mut self) -> QuizEvent {
        match self.prepare_question() {
            Some(question) => QuizEvent::QuestionPresented {
                question,
                progress: self.progress(),
            },
            None => QuizEvent::Completed(self.complete()),
        }
    }

    /// Build options for the entry at `question_index` and make it active.
    fn prepare_question(&mut self) -> Option<Question> {
        let entry = self.state.questions.get(self.state.question_index)?.clone();
        let wanted = self.config.option_count.saturating_sub(1);

        let distractors = match self.store.sample_excluding(&entry.answer, wanted, &mut self.rng) {
            Ok(distractors) => distractors,
            Err(err) => {
                let available = self.store.eligible_count(&entry.answer);
                warn!(%err, available, "using every available distractor");
                self.store
                    .sample_excluding(&entry.answer, available, &mut self.rng)
                    .unwrap_or_default()
            }
        };

        let question = Question {
            number: self.state.question_index + 1,
            options: helpers::answer_options(&entry, &distractors, &mut self.rng),
            entry,
        };
        self.state.selected_answer = None;
        self.feedback = None;
        self.current = Some(question.clone());
        Some(question)
    }

    fn complete(&mut self) -> ResultReport {
        let report = compute_result(self.state.score, self.state.questions.len());
        self.phase = SessionPhase::Completed;
        self.state.completed = true;
        self.current = None;
        self.report = Some(report.clone());
        debug!(
            score = report.score,
            total = report.total,
            percentage = report.percentage,
            tier = %report.tier,
            "quiz completed"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> QuizSession {
        QuizSession::with_builtin(QuizConfig::new().with_seed(seed)).unwrap()
    }

    #[test]
    fn new_session_is_not_started() {
        let s = session(1);
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert!(s.current_question().is_none());
        assert_eq!(s.answer_state(), None);
        assert_eq!(s.progress().question_number, 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let zero = QuizSession::with_builtin(QuizConfig::new().with_total_questions(0));
        assert!(matches!(zero, Err(QuizError::InvalidConfig(_))));
        let one_option = QuizSession::with_builtin(QuizConfig::new().with_option_count(1));
        assert!(matches!(one_option, Err(QuizError::InvalidConfig(_))));
    }

    #[test]
    fn start_presents_first_question() {
        let mut s = session(2);
        let QuizEvent::QuestionPresented { question, progress } = s.start() else {
            panic!("expected a question");
        };
        assert_eq!(question.number, 1);
        assert_eq!(question.options.len(), 4);
        assert_eq!(progress.question_number, 1);
        assert_eq!(progress.total, 20);
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(s.answer_state(), Some(AnswerState::Pending));
    }

    #[test]
    fn submit_before_start_is_ignored() {
        let mut s = session(3);
        assert!(s.submit_answer("matka").is_none());
        assert_eq!(s.state().score, 0);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut s = session(4);
        s.start();
        let before = s.state().clone();
        let err = s.advance().unwrap_err();
        assert!(matches!(err, QuizError::InvalidTransition { action: "advance", .. }));
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn advance_before_start_is_rejected() {
        let mut s = session(5);
        assert!(matches!(
            s.advance(),
            Err(QuizError::InvalidTransition { state: "not started", .. })
        ));
    }

    #[test]
    fn unknown_option_scores_as_incorrect() {
        let mut s = session(6);
        s.start();
        let fb = s.submit_answer("definitely not offered").unwrap();
        assert!(!fb.is_correct);
        assert!(!fb.known_option);
        assert_eq!(s.state().score, 0);
        assert_eq!(s.answer_state(), Some(AnswerState::Revealed));
    }

    #[test]
    fn re_presenting_a_pending_question_keeps_the_entry() {
        let mut s = session(7);
        s.start();
        let first = s.current_question().cloned().unwrap();
        let again = s.present_current_question().unwrap();
        assert_eq!(first.entry, again.entry);
        assert_eq!(again.options.len(), 4);
        assert_eq!(again.options.iter().filter(|o| **o == first.entry.answer).count(), 1);
    }

    #[test]
    fn re_presenting_an_answered_question_keeps_it_locked() {
        let mut s = session(8);
        s.start();
        let answer = s.current_question().unwrap().entry.answer.clone();
        s.submit_answer(&answer);
        let shown = s.current_question().cloned().unwrap();
        assert_eq!(s.present_current_question().unwrap(), shown);
        assert_eq!(s.answer_state(), Some(AnswerState::Revealed));
        s.submit_answer(&answer);
        assert_eq!(s.state().score, 1);
    }

    #[test]
    fn reset_returns_to_not_started() {
        let mut s = session(9);
        s.start();
        s.submit_answer("x");
        s.reset();
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert_eq!(s.state(), &SessionState::default());
        assert!(s.snapshot().question.is_none());
        assert!(s.present_current_question().is_err());
    }

    #[test]
    fn start_with_zero_completes_immediately() {
        let mut s = session(10);
        let event = s.start_with(0);
        assert!(matches!(event, QuizEvent::Completed(ref r) if r.total == 0 && r.percentage == 0));
        assert_eq!(s.phase(), SessionPhase::Completed);
        assert!(s.state().completed);
    }

    #[test]
    fn progress_tracks_answers() {
        let mut s = session(11);
        s.start_with(3);
        assert_eq!(s.progress().answered, 0);
        let answer = s.current_question().unwrap().entry.answer.clone();
        s.submit_answer(&answer);
        let p = s.progress();
        assert_eq!((p.question_number, p.answered, p.score), (1, 1, 1));
        s.advance().unwrap();
        let p = s.progress();
        assert_eq!((p.question_number, p.answered, p.score), (2, 1, 1));
        assert_eq!(p.percent_complete, 67);
    }
}
