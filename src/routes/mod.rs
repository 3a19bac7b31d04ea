use serde::{Deserialize, Serialize};

pub mod category;
pub mod question;
pub mod quiz;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApiStatus {
    success: bool,
}

pub async fn index() -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&ApiStatus { success: true }))
}
