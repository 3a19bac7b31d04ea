use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{Level, event, instrument};

use handle_errors::Error;

use crate::store::Store;
use crate::types::category::{Category, format_categories};
use crate::types::pagination::{QUESTIONS_PER_PAGE, extract_page, paginate};
use crate::types::question::{NewQuestion, Question, SearchPayload};
use crate::validation::{is_valid_question, is_valid_search};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: HashMap<i32, String>,
    current_category: Option<Category>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuestionResponse {
    success: bool,
    new_question: Question,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DeletedQuestionResponse {
    success: bool,
    deleted_question: Question,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<Category>,
}

#[instrument]
pub async fn get_questions(
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "trivia_api", Level::INFO, "querying questions");
    let page = extract_page(&params);

    let questions = match store.get_questions().await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };
    let categories = match store.get_categories().await {
        Ok(categories) => categories,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let res = QuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: paginate(questions, page, QUESTIONS_PER_PAGE),
        categories: format_categories(categories),
        current_category: None,
    };
    Ok(warp::reply::json(&res))
}

pub async fn add_question(
    store: Store,
    payload: Value,
) -> Result<impl warp::Reply, warp::Rejection> {
    if !is_valid_question(&payload) {
        return Err(warp::reject::custom(Error::InvalidPayload));
    }
    let new_question: NewQuestion = match serde_json::from_value(payload) {
        Ok(new_question) => new_question,
        Err(_) => return Err(warp::reject::custom(Error::InvalidPayload)),
    };

    match store.add_question(new_question).await {
        Ok(question) => Ok(warp::reply::json(&NewQuestionResponse {
            success: true,
            new_question: question,
        })),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn delete_question(
    id: i32,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.delete_question(id).await {
        Ok(Some(question)) => {
            event!(target: "trivia_api", Level::INFO, id, "question deleted");
            Ok(warp::reply::json(&DeletedQuestionResponse {
                success: true,
                deleted_question: question,
            }))
        }
        Ok(None) => Err(warp::reject::custom(Error::QuestionNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn search_questions(
    params: HashMap<String, String>,
    store: Store,
    payload: Value,
) -> Result<impl warp::Reply, warp::Rejection> {
    if !is_valid_search(&payload) {
        return Err(warp::reject::custom(Error::InvalidPayload));
    }
    let search: SearchPayload = match serde_json::from_value(payload) {
        Ok(search) => search,
        Err(_) => return Err(warp::reject::custom(Error::InvalidPayload)),
    };
    let page = extract_page(&params);

    let questions = match store.search_questions(&search.search_term).await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let res = SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions: paginate(questions, page, QUESTIONS_PER_PAGE),
        current_category: None,
    };
    Ok(warp::reply::json(&res))
}
