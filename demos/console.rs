//! Console front end for the vocabulary quiz.
//!
//! Run with: `cargo run --example console`
//!
//! Options:
//!
//! - `QUIZ_QUESTIONS=<n>`: number of questions (default 20)
//! - `QUIZ_SEED=<u64>`: reproducible question and option order
//! - `QUIZ_VOCAB=<path>`: JSON word list (`[{ "prompt", "answer", "auxiliary"? }]`)
//! - `RUST_LOG=vocab_quiz=debug`: show engine transitions
//!
//! Type the number of an option to answer, Enter to continue, `r` to
//! restart, `q` to quit.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;
use vocab_quiz::{
    AnswerFeedback, Progress, Question, QuizConfig, QuizEvent, QuizSession, ResultReport,
    VocabularyStore,
};

fn load_store() -> Result<VocabularyStore, Box<dyn std::error::Error>> {
    match std::env::var("QUIZ_VOCAB") {
        Ok(path) => Ok(VocabularyStore::from_json(&std::fs::read_to_string(path)?)?),
        Err(_) => Ok(VocabularyStore::builtin()),
    }
}

fn load_config() -> QuizConfig {
    let mut config = QuizConfig::new();
    if let Some(n) = std::env::var("QUIZ_QUESTIONS").ok().and_then(|v| v.parse().ok()) {
        config = config.with_total_questions(n);
    }
    if let Some(seed) = std::env::var("QUIZ_SEED").ok().and_then(|v| v.parse().ok()) {
        config = config.with_seed(seed);
    }
    config
}

fn print_question(question: &Question, progress: &Progress) {
    println!();
    println!("━━ Question {}/{}  ·  Score: {} ━━", progress.question_number, progress.total, progress.score);
    println!();
    println!("  {}", question.prompt());
    println!();
    for (i, option) in question.options.iter().enumerate() {
        println!("  [{}] {option}", i + 1);
    }
}

fn print_feedback(feedback: &AnswerFeedback) {
    let mark = if feedback.is_correct { "✓" } else { "✗" };
    println!();
    println!("  {mark} {}", feedback.message);
    if let Some(aux) = &feedback.auxiliary {
        println!("    ({aux})");
    }
}

fn print_report(report: &ResultReport) {
    println!();
    println!("══ {} ══", report.title);
    println!("  {}/{} correct ({}%)", report.score, report.total, report.percentage);
    println!("  {}", report.message);
    println!();
    println!("  [r] play again   [q] quit");
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut session = QuizSession::new(load_store()?, load_config())?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Polish: family members");
    println!("Press Enter to start.");
    if read_line(&mut input)?.is_none() {
        return Ok(());
    }

    let mut event = session.start();
    loop {
        match &event {
            QuizEvent::QuestionPresented { question, progress } => print_question(question, progress),
            QuizEvent::Completed(report) => print_report(report),
        }

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        match line.as_str() {
            "q" => return Ok(()),
            "r" => {
                event = session.restart();
                continue;
            }
            _ => {}
        }

        let QuizEvent::QuestionPresented { question, .. } = &event else {
            continue;
        };
        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i))
            .cloned()
            .unwrap_or(line);
        if let Some(feedback) = session.submit_answer(&choice) {
            print_feedback(&feedback);
        }

        println!("  Press Enter for the next question.");
        if read_line(&mut input)?.is_none() {
            return Ok(());
        }
        match session.advance() {
            Ok(next) => event = next,
            Err(err) => println!("  {err}"),
        }
    }
}
