//! Payload validators for the mutating and query endpoints. Each predicate
//! inspects the raw JSON value before it is decoded into a typed struct, and
//! fails closed: any missing or wrong-typed field makes it return false.

use serde_json::Value;

pub fn is_valid_question(payload: &Value) -> bool {
    non_empty_string(payload.get("question"))
        && non_empty_string(payload.get("answer"))
        && positive_integer(payload.get("difficulty"))
        && positive_integer(payload.get("category"))
}

pub fn is_valid_search(payload: &Value) -> bool {
    non_empty_string(payload.get("searchTerm"))
}

/// An empty `previous_questions` array is valid: it is the first turn of a
/// quiz, where no question has been asked yet.
pub fn is_valid_quiz(payload: &Value) -> bool {
    let history_ok = matches!(payload.get("previous_questions"), Some(Value::Array(_)));
    let category_ok = payload.get("quiz_category").is_some_and(|category| {
        positive_integer(category.get("id")) && non_empty_string(category.get("type"))
    });

    history_ok && category_ok
}

fn non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

fn positive_integer(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(n)) if n.as_u64().is_some_and(|n| n > 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_complete_question() {
        let payload = json!({
            "question": "Q",
            "answer": "A",
            "category": 2,
            "difficulty": 3,
        });
        assert!(is_valid_question(&payload));
    }

    #[test]
    fn rejects_a_question_with_unrelated_fields() {
        assert!(!is_valid_question(&json!({ "mock_field": "mock" })));
    }

    #[test]
    fn rejects_empty_or_wrong_typed_question_fields() {
        assert!(!is_valid_question(&json!({
            "question": "",
            "answer": "A",
            "category": 2,
            "difficulty": 3,
        })));
        assert!(!is_valid_question(&json!({
            "question": "Q",
            "answer": "A",
            "category": 2,
            "difficulty": "3",
        })));
        assert!(!is_valid_question(&json!({
            "question": "Q",
            "answer": "A",
            "category": 0,
            "difficulty": 3,
        })));
    }

    #[test]
    fn search_requires_a_non_empty_term() {
        assert!(is_valid_search(&json!({ "searchTerm": "title" })));
        assert!(!is_valid_search(&json!({ "searchTerm": "" })));
        assert!(!is_valid_search(&json!({ "searchTerm": 3 })));
        assert!(!is_valid_search(&json!({})));
    }

    #[test]
    fn quiz_with_empty_history_is_valid() {
        let payload = json!({
            "previous_questions": [],
            "quiz_category": { "id": 1, "type": "x" },
        });
        assert!(is_valid_quiz(&payload));
    }

    #[test]
    fn quiz_without_category_is_invalid() {
        assert!(!is_valid_quiz(&json!({ "previous_questions": [] })));
    }

    #[test]
    fn quiz_with_malformed_fields_is_invalid() {
        assert!(!is_valid_quiz(&json!({
            "previous_questions": 3,
            "quiz_category": { "id": 1, "type": "x" },
        })));
        assert!(!is_valid_quiz(&json!({
            "previous_questions": [],
            "quiz_category": { "id": 0, "type": "x" },
        })));
        assert!(!is_valid_quiz(&json!({
            "previous_questions": [],
            "quiz_category": { "id": 1, "type": "" },
        })));
        assert!(!is_valid_quiz(&json!({
            "previous_questions": [],
            "quiz_category": "science",
        })));
        assert!(!is_valid_quiz(&json!({ "mock_field": "mock" })));
    }
}
