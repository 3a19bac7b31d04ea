#![warn(clippy::all)]

use handle_errors::return_error;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{Filter, http::Method};

mod config;
mod routes;
mod store;
mod types;
mod validation;

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    let config = config::Config::new()?;

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},trivia_api={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        // Log an event each time a span closes; used by the route traces.
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = store::Store::new(&config.db_url()).await?;

    sqlx::migrate!()
        .run(&store.clone().connection)
        .await
        .map_err(handle_errors::Error::MigrationError)?;

    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("Content-Type")
        .allow_header("Authorization")
        .allow_methods(&[
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ]);

    let index = warp::get()
        .and(warp::path("api"))
        .and(warp::path::end())
        .and_then(routes::index);

    let get_categories = warp::get()
        .and(warp::path("api"))
        .and(warp::path("categories"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::category::get_categories);

    let get_questions = warp::get()
        .and(warp::path("api"))
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::question::get_questions)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_questions request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let add_question = warp::post()
        .and(warp::path("api"))
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::question::add_question);

    let delete_question = warp::delete()
        .and(warp::path("api"))
        .and(warp::path("questions"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::question::delete_question);

    let search_questions = warp::post()
        .and(warp::path("api"))
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::question::search_questions);

    let get_questions_by_category = warp::get()
        .and(warp::path("api"))
        .and(warp::path("categories"))
        .and(warp::path::param::<i32>())
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::category::get_questions_by_category);

    let play_quiz = warp::post()
        .and(warp::path("api"))
        .and(warp::path("quizzes"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::quiz::play_quiz);

    let routes = index
        .or(get_categories)
        .or(get_questions)
        .or(add_question)
        .or(delete_question)
        .or(search_questions)
        .or(get_questions_by_category)
        .or(play_quiz)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error);

    tracing::info!(target: "trivia_api", port = config.port, "trivia API listening");
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
