use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use handle_errors::Error;

use crate::store::Store;
use crate::types::category::{Category, format_categories};
use crate::types::pagination::{QUESTIONS_PER_PAGE, extract_page, paginate};
use crate::types::question::Question;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoriesResponse {
    success: bool,
    categories: HashMap<i32, String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Category,
}

pub async fn get_categories(store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let categories = match store.get_categories().await {
        Ok(categories) => categories,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    Ok(warp::reply::json(&CategoriesResponse {
        success: true,
        categories: format_categories(categories),
    }))
}

pub async fn get_questions_by_category(
    id: i32,
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let page = extract_page(&params);

    let category = match store.get_category(id).await {
        Ok(Some(category)) => category,
        Ok(None) => return Err(warp::reject::custom(Error::CategoryNotFound)),
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let questions = match store.get_questions_by_category(category.id.clone()).await {
        Ok(questions) => questions,
        Err(e) => return Err(warp::reject::custom(e)),
    };

    let res = CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: paginate(questions, page, QUESTIONS_PER_PAGE),
        current_category: category,
    };
    Ok(warp::reply::json(&res))
}
