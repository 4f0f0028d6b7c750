//! Quiz Data Structures

use serde::{Deserialize, Serialize};

/// A multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Question text
    pub prompt: String,
    /// Answer choices, selected by index
    pub choices: Vec<String>,
}

/// A quiz as delivered by the server (no answer key client-side)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique quiz id
    pub id: String,
    /// Display title
    pub title: String,
    /// Time allowed for one attempt, in seconds
    pub time_limit_secs: u32,
    /// The questions, in display order
    pub questions: Vec<QuizQuestion>,
}

/// Response for `GET /quizzes/get/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuizzesResponse {
    pub success: bool,
    pub quizzes: Vec<Quiz>,
}

/// Request body for `POST /quizzes/submit/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub user_id: String,
    /// Selected choice index per question; `None` for unanswered
    pub answers: Vec<Option<usize>>,
}

/// Per-question grading result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub correct: bool,
    pub correct_choice: usize,
}

/// Response for `POST /quizzes/submit/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuizResponse {
    pub score: u32,
    pub total: u32,
    pub results: Vec<QuestionResult>,
}
