//! Quiz Session
//!
//! Walks a learner through the question bank one question at a time.
//! A question can be answered once; navigating away and back keeps it
//! answered but clears the pending selection.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{quiz_questions, QuizQuestion};
use crate::error::{DecibelError, Result};

/// Feedback for a submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub question_id: u32,
    pub answer: String,
    pub correct: bool,
    pub correct_option: &'static str,
    pub explanation: &'static str,
}

/// In-memory quiz progress
#[derive(Debug, Clone)]
pub struct QuizSession {
    session_id: String,
    questions: &'static [QuizQuestion],
    current: usize,
    selected: Option<String>,
    answered: BTreeSet<usize>,
    score: usize,
    question_times: Vec<Duration>,
    question_started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a session over the built-in question bank
    pub fn new() -> Self {
        // The built-in bank is never empty
        Self::started_at(quiz_questions(), Utc::now())
    }

    /// Start a session over `questions`, which must not be empty
    pub fn with_questions(questions: &'static [QuizQuestion]) -> Result<Self> {
        if questions.is_empty() {
            return Err(DecibelError::EmptyQuiz);
        }
        Ok(Self::started_at(questions, Utc::now()))
    }

    fn started_at(questions: &'static [QuizQuestion], now: DateTime<Utc>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            questions,
            current: 0,
            selected: None,
            answered: BTreeSet::new(),
            score: 0,
            question_times: Vec::new(),
            question_started_at: now,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static QuizQuestion {
        &self.questions[self.current]
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Whether the current question has been submitted
    pub fn is_current_answered(&self) -> bool {
        self.answered.contains(&self.current)
    }

    /// Select an option for the current question
    pub fn select(&mut self, option: &str) -> Result<()> {
        let question = self.current_question();
        if self.is_current_answered() {
            return Err(DecibelError::AlreadyAnswered {
                question_id: question.id,
            });
        }
        let option = option.trim().to_ascii_lowercase();
        if question.option(&option).is_none() {
            return Err(DecibelError::UnknownOption {
                question_id: question.id,
                option,
            });
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Submit the current selection
    pub fn submit(&mut self) -> Result<AnswerOutcome> {
        self.submit_at(Utc::now())
    }

    /// Submit the current selection, timing the question up to `now`
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<AnswerOutcome> {
        let question = self.current_question();
        if self.is_current_answered() {
            return Err(DecibelError::AlreadyAnswered {
                question_id: question.id,
            });
        }
        let answer = self.selected.clone().ok_or(DecibelError::NoAnswerSelected {
            question_id: question.id,
        })?;

        self.question_times.push(now - self.question_started_at);
        let correct = question.is_correct(&answer);
        if correct {
            self.score += 1;
        }
        self.answered.insert(self.current);

        log::debug!(
            "Quiz {} question {} answered '{}' ({})",
            self.session_id,
            question.id,
            answer,
            if correct { "correct" } else { "incorrect" }
        );

        Ok(AnswerOutcome {
            question_id: question.id,
            answer,
            correct,
            correct_option: question.correct,
            explanation: question.explanation,
        })
    }

    /// Move to the next question; false when already on the last one
    pub fn next(&mut self) -> bool {
        self.next_at(Utc::now())
    }

    pub fn next_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.current + 1 >= self.questions.len() {
            return false;
        }
        self.current += 1;
        self.restart_question(now);
        true
    }

    /// Move to the previous question; false when already on the first one
    pub fn previous(&mut self) -> bool {
        self.previous_at(Utc::now())
    }

    pub fn previous_at(&mut self, now: DateTime<Utc>) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.restart_question(now);
        true
    }

    /// Clear all progress and return to the first question
    pub fn reset(&mut self) {
        self.reset_at(Utc::now());
    }

    pub fn reset_at(&mut self, now: DateTime<Utc>) {
        self.current = 0;
        self.answered.clear();
        self.score = 0;
        self.question_times.clear();
        self.restart_question(now);
    }

    fn restart_question(&mut self, now: DateTime<Utc>) {
        self.selected = None;
        self.question_started_at = now;
    }

    /// Position of the current question as a percentage of the quiz
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    /// Score as a whole-number percentage of all questions
    pub fn mastery_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }

    /// Mean time per submitted answer in whole seconds
    pub fn average_seconds(&self) -> u64 {
        if self.question_times.is_empty() {
            return 0;
        }
        let total_ms: i64 = self
            .question_times
            .iter()
            .map(|elapsed| elapsed.num_milliseconds().max(0))
            .sum();
        let mean_ms = total_ms as f64 / self.question_times.len() as f64;
        (mean_ms / 1000.0).round() as u64
    }

    /// Whether every question has been answered
    pub fn is_complete(&self) -> bool {
        self.answered.len() == self.questions.len()
    }

    /// Answer every question in order, e.g. for non-interactive grading
    pub fn answer_all<S: AsRef<str>>(&mut self, answers: &[S]) -> Result<Vec<AnswerOutcome>> {
        if answers.len() != self.questions.len() {
            return Err(DecibelError::AnswerCountMismatch {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }

        self.reset();
        let mut outcomes = Vec::with_capacity(answers.len());
        for (index, answer) in answers.iter().enumerate() {
            self.select(answer.as_ref())?;
            outcomes.push(self.submit()?);
            if index + 1 < answers.len() {
                self.next();
            }
        }
        Ok(outcomes)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session_at(now: DateTime<Utc>) -> QuizSession {
        QuizSession::started_at(quiz_questions(), now)
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut quiz = QuizSession::new();
        quiz.select("c").unwrap();
        let outcome = quiz.submit().unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.question_id, 1);
        assert_eq!(quiz.score(), 1);
        assert!(quiz.is_current_answered());
    }

    #[test]
    fn test_wrong_answer_reports_key() {
        let mut quiz = QuizSession::new();
        quiz.select("B").unwrap();
        let outcome = quiz.submit().unwrap();

        assert!(!outcome.correct);
        assert_eq!(outcome.answer, "b");
        assert_eq!(outcome.correct_option, "c");
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut quiz = QuizSession::new();
        assert!(matches!(
            quiz.submit(),
            Err(DecibelError::NoAnswerSelected { question_id: 1 })
        ));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut quiz = QuizSession::new();
        assert!(matches!(
            quiz.select("e"),
            Err(DecibelError::UnknownOption { .. })
        ));
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_answered_question_is_locked() {
        let mut quiz = QuizSession::new();
        quiz.select("c").unwrap();
        quiz.submit().unwrap();

        assert!(matches!(
            quiz.select("a"),
            Err(DecibelError::AlreadyAnswered { .. })
        ));
        assert!(quiz.submit().is_err());

        // Still locked after navigating away and back
        assert!(quiz.next());
        assert!(quiz.previous());
        assert!(quiz.is_current_answered());
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut quiz = QuizSession::new();
        assert!(!quiz.previous());
        for _ in 0..4 {
            assert!(quiz.next());
        }
        assert_eq!(quiz.current_index(), 4);
        assert!(!quiz.next());
    }

    #[test]
    fn test_navigation_clears_selection() {
        let mut quiz = QuizSession::new();
        quiz.select("a").unwrap();
        quiz.next();
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_progress_and_mastery() {
        let mut quiz = QuizSession::new();
        assert_eq!(quiz.progress_percent(), 20.0);

        quiz.select("c").unwrap();
        quiz.submit().unwrap();
        quiz.next();
        quiz.select("a").unwrap();
        quiz.submit().unwrap();

        assert_eq!(quiz.progress_percent(), 40.0);
        assert_eq!(quiz.mastery_percent(), 40);
        assert!(!quiz.is_complete());
    }

    #[test]
    fn test_average_seconds() {
        let start = Utc::now();
        let mut quiz = session_at(start);

        quiz.select("c").unwrap();
        quiz.submit_at(start + Duration::milliseconds(4_000)).unwrap();

        let second_start = start + Duration::milliseconds(5_000);
        quiz.next_at(second_start);
        quiz.select("a").unwrap();
        quiz.submit_at(second_start + Duration::milliseconds(7_000)).unwrap();

        // (4000 + 7000) / 2 = 5500 ms
        assert_eq!(quiz.average_seconds(), 6);
    }

    #[test]
    fn test_answer_all_perfect() {
        let mut quiz = QuizSession::new();
        let outcomes = quiz.answer_all(&["c", "a", "d", "c", "c"]).unwrap();

        assert!(outcomes.iter().all(|o| o.correct));
        assert!(quiz.is_complete());
        assert_eq!(quiz.mastery_percent(), 100);
    }

    #[test]
    fn test_answer_all_wrong_count() {
        let mut quiz = QuizSession::new();
        assert!(matches!(
            quiz.answer_all(&["c", "a"]),
            Err(DecibelError::AnswerCountMismatch { expected: 5, actual: 2 })
        ));
    }

    #[test]
    fn test_reset() {
        let mut quiz = QuizSession::new();
        quiz.answer_all(&["a", "a", "a", "a", "a"]).unwrap();
        assert_eq!(quiz.score(), 1);

        quiz.reset();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.average_seconds(), 0);
        assert!(!quiz.is_complete());
    }

    #[test]
    fn test_empty_question_bank_rejected() {
        static NO_QUESTIONS: [QuizQuestion; 0] = [];
        assert!(matches!(
            QuizSession::with_questions(&NO_QUESTIONS),
            Err(DecibelError::EmptyQuiz)
        ));
    }

    #[test]
    fn test_with_questions_subset() {
        let mut quiz = QuizSession::with_questions(&quiz_questions()[..2]).unwrap();
        assert_eq!(quiz.len(), 2);
        assert!(!quiz.is_complete());
        quiz.select("c").unwrap();
        quiz.submit().unwrap();
        assert!(quiz.next());
        assert!(!quiz.next());
    }

    #[test]
    fn test_session_ids_unique() {
        assert_ne!(QuizSession::new().session_id(), QuizSession::new().session_id());
    }
}
