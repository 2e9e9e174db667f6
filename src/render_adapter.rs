use serde_json::{json, Value};
use crate::quiz_engine::models::{
    AnswerFeedback, AnswerState, Progress, Question, QuizSnapshot, ResultReport, SessionPhase,
};

/// Screen id the web client switches to for each phase.
fn screen_id(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::NotStarted => "start-screen",
        SessionPhase::InProgress => "quiz-screen",
        SessionPhase::Completed  => "result-screen",
    }
}

/// CSS state of one option button.
///
/// Before reveal every button is plain. After reveal the correct answer is
/// green, a wrong pick is red, and all buttons are disabled.
fn option_state(option: &str, correct: &str, selected: Option<&str>) -> &'static str {
    match selected {
        None => "",
        Some(_) if option == correct => "correct",
        Some(chosen) if option == chosen => "incorrect",
        Some(_) => "",
    }
}

fn option_buttons(question: &Question, selected: Option<&str>) -> Value {
    let buttons: Vec<Value> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            json!({
                "index": i,
                "text": option,
                "state": option_state(option, question.correct_answer(), selected),
                "selected": selected == Some(option.as_str()),
                "disabled": selected.is_some()
            })
        })
        .collect();
    Value::Array(buttons)
}

fn progress_block(progress: &Progress) -> Value {
    json!({
        "label": format!("{}/{}", progress.question_number, progress.total),
        "question_number": progress.question_number,
        "total": progress.total,
        "score": progress.score,
        "fill_percent": progress.percent_complete
    })
}

/// Feedback panel payload.
pub fn feedback_json(feedback: &AnswerFeedback) -> Value {
    json!({
        "class": if feedback.is_correct { "correct" } else { "incorrect" },
        "icon": if feedback.is_correct { "fas fa-check-circle" } else { "fas fa-times-circle" },
        "text": feedback.message,
        "correct_answer": feedback.correct_answer,
        "auxiliary": feedback.auxiliary
    })
}

/// Result screen payload.
pub fn report_json(report: &ResultReport) -> Value {
    json!({
        "title": report.title,
        "message": report.message,
        "icon": { "class": report.icon, "color": report.color },
        "circle_score": report.score,
        "score_percent": format!("{}%", report.percentage),
        "correct_answers": report.score,
        "total": report.total,
        "tier": report.tier.to_string()
    })
}

/// Flatten a snapshot into the document the web client renders.
pub fn to_view_json(snapshot: &QuizSnapshot) -> Value {
    let selected = snapshot.feedback.as_ref().map(|f| f.chosen.as_str());

    let question = match &snapshot.question {
        Some(q) => json!({
            "label": format!("Question {}", q.number),
            "prompt": q.prompt(),
            "options": option_buttons(q, selected)
        }),
        None => Value::Null,
    };

    json!({
        "screen": screen_id(snapshot.phase),
        "progress": progress_block(&snapshot.progress),
        "question": question,
        "feedback": snapshot.feedback.as_ref().map(feedback_json),
        "next_enabled": snapshot.answer_state == Some(AnswerState::Revealed),
        "result": snapshot.report.as_ref().map(report_json)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{QuizConfig, QuizSession, VocabularyEntry, VocabularyStore};

    fn session() -> QuizSession {
        let store = VocabularyStore::new(vec![
            VocabularyEntry::new("мама", "matka").with_auxiliary("mother"),
            VocabularyEntry::new("папа", "ojciec"),
            VocabularyEntry::new("сын", "syn"),
        ])
        .unwrap();
        QuizSession::new(store, QuizConfig::new().with_total_questions(3).with_seed(21)).unwrap()
    }

    #[test]
    fn start_screen_before_start() {
        let view = to_view_json(&session().snapshot());
        assert_eq!(view["screen"], "start-screen");
        assert!(view["question"].is_null());
        assert_eq!(view["next_enabled"], false);
    }

    #[test]
    fn pending_question_has_plain_enabled_buttons() {
        let mut s = session();
        s.start();
        let view = to_view_json(&s.snapshot());
        assert_eq!(view["screen"], "quiz-screen");
        assert_eq!(view["question"]["label"], "Question 1");
        let options = view["question"]["options"].as_array().unwrap();
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|o| o["state"] == "" && o["disabled"] == false));
        assert!(view["feedback"].is_null());
    }

    #[test]
    fn wrong_answer_marks_both_buttons() {
        let mut s = session();
        s.start();
        let q = s.current_question().cloned().unwrap();
        let wrong = q.options.iter().find(|o| *o != q.correct_answer()).cloned().unwrap();
        s.submit_answer(&wrong);

        let view = to_view_json(&s.snapshot());
        let options = view["question"]["options"].as_array().unwrap();
        for o in options {
            let text = o["text"].as_str().unwrap();
            let expected = if text == q.correct_answer() {
                "correct"
            } else if text == wrong {
                "incorrect"
            } else {
                ""
            };
            assert_eq!(o["state"], expected, "button {text}");
            assert_eq!(o["disabled"], true);
        }
        assert_eq!(view["feedback"]["class"], "incorrect");
        assert_eq!(view["next_enabled"], true);
    }

    #[test]
    fn result_screen_after_completion() {
        let mut s = session();
        s.start();
        while let Some(q) = s.current_question().cloned() {
            s.submit_answer(q.correct_answer());
            s.advance().unwrap();
        }
        let view = to_view_json(&s.snapshot());
        assert_eq!(view["screen"], "result-screen");
        assert_eq!(view["result"]["score_percent"], "100%");
        assert_eq!(view["result"]["icon"]["class"], "fas fa-crown");
        assert_eq!(view["progress"]["label"], "3/3");
    }
}
