use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::types::category::CategoryId;
use crate::types::question::{Question, QuestionId};

/// Body of one quiz turn. The server keeps no session state, so the client
/// carries the full history of asked questions on every call.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizPayload {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizCategory {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Pick the next quiz question uniformly at random from the candidates that
/// have not been asked yet. `None` means the category is played out, which
/// ends the quiz rather than being an error.
pub fn next_question(candidates: Vec<Question>, previous: &[QuestionId]) -> Option<Question> {
    let eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();

    eligible.choose(&mut rand::thread_rng()).cloned()
}
