use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use handle_errors::Error;

use crate::types::{
    category::{Category, CategoryId},
    question::{NewQuestion, Question, QuestionId},
};

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Store, Error> {
        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => return Err(Error::DatabaseQueryError(e)),
        };

        Ok(Store {
            connection: db_pool,
        })
    }

    // The question listings are fetched in full and ordered by id: pagination
    // happens in memory because every listing response also carries the total
    // count of the unpaginated result set.
    pub async fn get_questions(&self) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions ORDER BY id")
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: CategoryId(row.get("category")),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }

    pub async fn get_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE category = $1 ORDER BY id")
            .bind(category.0)
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: CategoryId(row.get("category")),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }

    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE question ILIKE $1 ORDER BY id")
            .bind(format!("%{}%", term))
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: CategoryId(row.get("category")),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }

    pub async fn add_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        match sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty",
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category.0)
        .bind(new_question.difficulty)
        .map(|row: PgRow| Question {
            id: QuestionId(row.get("id")),
            question: row.get("question"),
            answer: row.get("answer"),
            category: CategoryId(row.get("category")),
            difficulty: row.get("difficulty"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(question) => Ok(question),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }

    // DELETE .. RETURNING does the removal and the fetch in one atomic
    // statement; a missing row comes back as None instead of an error.
    pub async fn delete_question(&self, question_id: i32) -> Result<Option<Question>, Error> {
        match sqlx::query(
            "DELETE FROM questions WHERE id = $1
            RETURNING id, question, answer, category, difficulty",
        )
        .bind(question_id)
        .map(|row: PgRow| Question {
            id: QuestionId(row.get("id")),
            question: row.get("question"),
            answer: row.get("answer"),
            category: CategoryId(row.get("category")),
            difficulty: row.get("difficulty"),
        })
        .fetch_optional(&self.connection)
        .await
        {
            Ok(question) => Ok(question),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        match sqlx::query("SELECT * from categories ORDER BY id")
            .map(|row: PgRow| Category {
                id: CategoryId(row.get("id")),
                kind: row.get("type"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(categories) => Ok(categories),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }

    pub async fn get_category(&self, category_id: i32) -> Result<Option<Category>, Error> {
        match sqlx::query("SELECT * from categories WHERE id = $1")
            .bind(category_id)
            .map(|row: PgRow| Category {
                id: CategoryId(row.get("id")),
                kind: row.get("type"),
            })
            .fetch_optional(&self.connection)
            .await
        {
            Ok(category) => Ok(category),
            Err(e) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Err(Error::DatabaseQueryError(e))
            }
        }
    }
}
