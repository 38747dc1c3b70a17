use crate::models::{Difficulty, QuestionType, RawQuestion};

/// The built-in question set used when the trivia service cannot supply
/// any questions.
pub fn offline_questions() -> Vec<RawQuestion> {
    vec![
        RawQuestion {
            category: "General".to_string(),
            kind: QuestionType::Multiple,
            difficulty: Difficulty::Easy,
            question: "What is the capital of France?".to_string(),
            correct_answer: "Paris".to_string(),
            incorrect_answers: vec![
                "Berlin".to_string(),
                "Madrid".to_string(),
                "Lisbon".to_string(),
            ],
        },
        RawQuestion {
            category: "Science".to_string(),
            kind: QuestionType::Boolean,
            difficulty: Difficulty::Easy,
            question: "The chemical symbol for Gold is Au.".to_string(),
            correct_answer: "True".to_string(),
            incorrect_answers: vec!["False".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_set_has_one_of_each_type() {
        let questions = offline_questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].kind, QuestionType::Multiple);
        assert_eq!(questions[0].incorrect_answers.len(), 3);
        assert_eq!(questions[1].kind, QuestionType::Boolean);
        assert_eq!(questions[1].incorrect_answers.len(), 1);
    }
}
