use serde::{Deserialize, Serialize};

use crate::types::category::CategoryId;

#[derive(Serialize, Debug, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct QuestionId(pub i32);

/// A question as submitted by a client; the store assigns the id.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
