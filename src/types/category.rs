use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct CategoryId(pub i32);

/// Collapses the category rows into the `{id: type}` object the API returns.
/// Ids are unique in the store; should a duplicate sneak in, the last row wins.
pub fn format_categories(categories: Vec<Category>) -> HashMap<i32, String> {
    categories
        .into_iter()
        .map(|category| (category.id.0, category.kind))
        .collect()
}
