//! Quiz Attempt State Machine
//!
//! One attempt at one quiz: NotStarted -> InProgress -> Submitted.
//!
//! While InProgress a one-per-second decrement runs; reaching zero forces
//! exactly one automatic submission with whatever answers are recorded at
//! that instant. An explicit submit also forces Submitted at any remaining
//! time. Submitted is terminal. Navigating between questions never changes
//! the phase, and a question does not have to be answered before advancing.

use thiserror::Error;

use crate::shared::portal::{Quiz, SubmitQuizRequest};

/// Phase of one quiz attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Submitted,
}

/// Attempted operation was invalid in the current phase
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuizStateError {
    #[error("the attempt has not been started")]
    NotStarted,
    #[error("the attempt was already started")]
    AlreadyStarted,
    #[error("the attempt was already submitted")]
    AlreadySubmitted,
}

/// The answers captured at the moment of submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSubmission {
    pub quiz_id: String,
    pub answers: Vec<Option<usize>>,
}

impl QuizSubmission {
    /// Build the request body for `POST /quizzes/submit/{id}`
    pub fn into_request(self, user_id: &str) -> SubmitQuizRequest {
        SubmitQuizRequest {
            user_id: user_id.to_string(),
            answers: self.answers,
        }
    }
}

/// A single attempt at a quiz
pub struct QuizAttempt {
    quiz: Quiz,
    phase: QuizPhase,
    remaining_secs: u32,
    current_question: usize,
    answers: Vec<Option<usize>>,
}

impl QuizAttempt {
    /// Create an attempt in the NotStarted phase
    pub fn new(quiz: Quiz) -> Self {
        let question_count = quiz.questions.len();
        let remaining_secs = quiz.time_limit_secs;
        Self {
            quiz,
            phase: QuizPhase::NotStarted,
            remaining_secs,
            current_question: 0,
            answers: vec![None; question_count],
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Start the attempt
    pub fn start(&mut self) -> Result<(), QuizStateError> {
        match self.phase {
            QuizPhase::NotStarted => {
                self.phase = QuizPhase::InProgress;
                tracing::info!("[QUIZ] attempt started: {}", self.quiz.id);
                Ok(())
            }
            QuizPhase::InProgress => Err(QuizStateError::AlreadyStarted),
            QuizPhase::Submitted => Err(QuizStateError::AlreadySubmitted),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the submission exactly once, on the tick that reaches zero.
    /// Further ticks (and ticks outside InProgress) are no-ops.
    pub fn tick(&mut self) -> Option<QuizSubmission> {
        if self.phase != QuizPhase::InProgress {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            tracing::info!("[QUIZ] time expired, auto-submitting {}", self.quiz.id);
            self.phase = QuizPhase::Submitted;
            return Some(self.submission());
        }
        None
    }

    /// Submit explicitly at any remaining time
    pub fn submit(&mut self) -> Result<QuizSubmission, QuizStateError> {
        match self.phase {
            QuizPhase::NotStarted => Err(QuizStateError::NotStarted),
            QuizPhase::Submitted => Err(QuizStateError::AlreadySubmitted),
            QuizPhase::InProgress => {
                self.phase = QuizPhase::Submitted;
                Ok(self.submission())
            }
        }
    }

    /// Record an answer for a question; only valid while InProgress
    pub fn answer(&mut self, question: usize, choice: usize) -> Result<(), QuizStateError> {
        match self.phase {
            QuizPhase::NotStarted => Err(QuizStateError::NotStarted),
            QuizPhase::Submitted => Err(QuizStateError::AlreadySubmitted),
            QuizPhase::InProgress => {
                if let Some(slot) = self.answers.get_mut(question) {
                    *slot = Some(choice);
                }
                Ok(())
            }
        }
    }

    /// Jump to a question. Navigation never changes the phase, and the
    /// current question does not need an answer first.
    pub fn goto(&mut self, question: usize) {
        if question < self.quiz.questions.len() {
            self.current_question = question;
        }
    }

    pub fn next_question(&mut self) {
        self.goto(self.current_question + 1);
    }

    pub fn prev_question(&mut self) {
        if self.current_question > 0 {
            self.current_question -= 1;
        }
    }

    fn submission(&self) -> QuizSubmission {
        QuizSubmission {
            quiz_id: self.quiz.id.clone(),
            answers: self.answers.clone(),
        }
    }
}
