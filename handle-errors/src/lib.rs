use serde::Serialize;
use tracing::{Level, event, instrument};
use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
};

#[derive(Debug)]
pub enum Error {
    ParseError(std::num::ParseIntError),
    InvalidPayload,
    QuestionNotFound,
    CategoryNotFound,
    Unprocessable,
    DatabaseQueryError(sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::ParseError(err) => {
                write!(f, "Cannot parse parameter: {}", err)
            }
            Error::InvalidPayload => {
                write!(f, "Invalid request payload")
            }
            Error::QuestionNotFound => {
                write!(f, "Question not found")
            }
            Error::CategoryNotFound => {
                write!(f, "Category not found")
            }
            Error::Unprocessable => {
                write!(f, "Request could not be processed")
            }
            Error::DatabaseQueryError(_) => {
                write!(f, "Cannot query the database")
            }
            Error::MigrationError(err) => {
                write!(f, "Cannot migrate the database: {}", err)
            }
        }
    }
}

impl Reject for Error {}

/// Uniform body carried by every error response.
#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

const FOREIGN_KEY_VIOLATION: &str = "23503";

fn json_error(status: StatusCode, message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }),
        status,
    )
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(Error::DatabaseQueryError(e)) = r.find() {
        event!(Level::ERROR, "Database query error");
        match e {
            // A question pointing at a category the store does not know is the
            // one database failure a client can trigger on its own.
            sqlx::Error::Database(err) if err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Ok(json_error(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Question references an unknown category",
                ))
            }
            _ => Ok(json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )),
        }
    } else if let Some(Error::QuestionNotFound) = r.find() {
        event!(Level::WARN, "Question not found");
        Ok(json_error(StatusCode::NOT_FOUND, "Question not found"))
    } else if let Some(Error::CategoryNotFound) = r.find() {
        event!(Level::WARN, "Category not found");
        Ok(json_error(StatusCode::NOT_FOUND, "Category not found"))
    } else if let Some(Error::InvalidPayload) = r.find() {
        event!(Level::WARN, "Rejected invalid payload");
        Ok(json_error(StatusCode::BAD_REQUEST, "Invalid request payload"))
    } else if let Some(Error::ParseError(e)) = r.find() {
        event!(Level::ERROR, "Cannot parse parameter: {}", e);
        Ok(json_error(StatusCode::BAD_REQUEST, "Cannot parse parameter"))
    } else if let Some(Error::Unprocessable) = r.find() {
        event!(Level::WARN, "Unprocessable request");
        Ok(json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Request could not be processed",
        ))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "CORS forbidden error: {}", error);
        Ok(json_error(StatusCode::FORBIDDEN, &error.to_string()))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "Cannot deserialize request body: {}", error);
        Ok(json_error(StatusCode::BAD_REQUEST, "Invalid request payload"))
    } else {
        event!(Level::WARN, "Requested route was not found");
        Ok(json_error(StatusCode::NOT_FOUND, "Route not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::Filter;

    async fn recovered(build: fn() -> Error) -> (StatusCode, serde_json::Value) {
        let filter = warp::any()
            .and_then(move || async move {
                Err::<warp::reply::Json, Rejection>(warp::reject::custom(build()))
            })
            .recover(return_error);
        let res = warp::test::request().reply(&filter).await;
        let body = serde_json::from_slice(&res.body()[..]).unwrap();
        (res.status(), body)
    }

    #[tokio::test]
    async fn question_not_found_maps_to_404() {
        let (status, body) = recovered(|| Error::QuestionNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Question not found");
    }

    #[tokio::test]
    async fn category_not_found_maps_to_404() {
        let (status, body) = recovered(|| Error::CategoryNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "Category not found");
    }

    #[tokio::test]
    async fn invalid_payload_maps_to_400() {
        let (status, body) = recovered(|| Error::InvalidPayload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 400);
    }

    #[tokio::test]
    async fn unprocessable_maps_to_422() {
        let (status, body) = recovered(|| Error::Unprocessable).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], 422);
    }

    #[tokio::test]
    async fn database_error_maps_to_500_without_detail() {
        let (status, body) = recovered(|| Error::DatabaseQueryError(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn unknown_route_maps_to_404() {
        let filter = warp::path("known")
            .map(|| "ok")
            .recover(return_error);
        let res = warp::test::request().path("/unknown").reply(&filter).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(&res.body()[..]).unwrap();
        assert_eq!(body["message"], "Route not found");
    }

    #[tokio::test]
    async fn unparsable_body_maps_to_400() {
        let filter = warp::post()
            .and(warp::body::json())
            .map(|_: serde_json::Value| "ok")
            .recover(return_error);
        let res = warp::test::request()
            .method("POST")
            .header("content-type", "application/json")
            .body("{not json")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&res.body()[..]).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 400);
    }
}
