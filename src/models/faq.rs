use serde::{Deserialize, Serialize};

/// The static FAQ document served next to the FAQ page.
///
/// Every field is required: a document missing `categories` (or any other
/// field) fails to decode instead of producing a half-built page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqDocument {
    pub title: String,
    pub description: String,
    /// Categories in display order.
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// Questions in display order.
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    /// Answer body in Markdown.
    pub answer: String,
}

impl FaqDocument {
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_order() {
        let json = r#"{
            "title": "FAQ",
            "description": "Common questions",
            "categories": [
                {"title": "Zeta", "questions": [
                    {"question": "Q2", "answer": "A2"},
                    {"question": "Q1", "answer": "A1"}
                ]},
                {"title": "Alpha", "questions": []}
            ]
        }"#;
        let doc: FaqDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.categories[0].title, "Zeta");
        assert_eq!(doc.categories[1].title, "Alpha");
        assert_eq!(doc.categories[0].questions[0].question, "Q2");
        assert_eq!(doc.question_count(), 2);
    }

    #[test]
    fn test_missing_categories_is_rejected() {
        let json = r#"{"title": "FAQ", "description": "d"}"#;
        assert!(serde_json::from_str::<FaqDocument>(json).is_err());
    }
}
