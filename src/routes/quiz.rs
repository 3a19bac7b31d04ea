use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{Level, event, instrument};

use handle_errors::Error;

use crate::store::Store;
use crate::types::question::Question;
use crate::types::quiz::{QuizPayload, next_question};
use crate::validation::is_valid_quiz;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

#[instrument]
pub async fn play_quiz(store: Store, payload: Value) -> Result<impl warp::Reply, warp::Rejection> {
    if !is_valid_quiz(&payload) {
        return Err(warp::reject::custom(Error::InvalidPayload));
    }
    let quiz: QuizPayload = match serde_json::from_value(payload) {
        Ok(quiz) => quiz,
        Err(_) => return Err(warp::reject::custom(Error::InvalidPayload)),
    };

    // No existence check on the category: an unknown id simply has no
    // questions, which ends the quiz with a null question.
    let candidates = match store
        .get_questions_by_category(quiz.quiz_category.id.clone())
        .await
    {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let question = next_question(candidates, &quiz.previous_questions);
    event!(target: "trivia_api", Level::INFO, served = question.is_some(), "quiz turn answered");
    Ok(warp::reply::json(&QuizResponse {
        success: true,
        question,
    }))
}
