use study_helper::domain::{Flashcard, QuizItem, Summary};

#[test]
fn given_completion_with_whitespace_when_creating_summary_then_trims_both_ends() {
    let summary = Summary::from_completion("  \n A short paragraph. \t\n");

    assert_eq!(summary.as_str(), "A short paragraph.");
}

#[test]
fn given_summary_when_serializing_then_is_plain_string() {
    let summary = Summary::from_completion("Text");

    assert_eq!(serde_json::to_value(&summary).unwrap(), serde_json::json!("Text"));
}

#[test]
fn given_flashcard_when_serializing_then_has_question_and_answer_fields() {
    let card = Flashcard::new("Q text", "A text");

    assert_eq!(
        serde_json::to_value(&card).unwrap(),
        serde_json::json!({"question": "Q text", "answer": "A text"})
    );
}

#[test]
fn given_quiz_item_when_serializing_then_has_question_options_and_answer_fields() {
    let item = QuizItem {
        question: "Pick one".to_string(),
        options: vec!["x".to_string(), "y".to_string()],
        answer: "A".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        serde_json::json!({"question": "Pick one", "options": ["x", "y"], "answer": "A"})
    );
}
