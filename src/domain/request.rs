//! Inbound request bodies and their validated forms.

use serde::Deserialize;

/// Body of `POST /generate-plan`. Every field is optional at the wire level so
/// that absence is reported as a validation error rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct PlanRequest {
    pub topic: Option<String>,
    pub num_days: Option<u32>,
    pub difficulty: Option<String>,
}

/// Body of `POST /generate-quiz`.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub topic: Option<String>,
    pub quiz_type: Option<String>,
    pub num_questions: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanParams {
    pub topic: String,
    pub num_days: u32,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    pub topic: String,
    pub quiz_type: String,
    pub num_questions: u32,
}

impl PlanRequest {
    /// Returns `None` when any field is missing, blank, or zero.
    pub fn validate(self) -> Option<PlanParams> {
        Some(PlanParams {
            topic: present(self.topic)?,
            num_days: self.num_days.filter(|&n| n > 0)?,
            difficulty: present(self.difficulty)?,
        })
    }
}

impl QuizRequest {
    /// Returns `None` when any field is missing, blank, or zero.
    pub fn validate(self) -> Option<QuizParams> {
        Some(QuizParams {
            topic: present(self.topic)?,
            quiz_type: present(self.quiz_type)?,
            num_questions: self.num_questions.filter(|&n| n > 0)?,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(topic: Option<&str>, num_days: Option<u32>, difficulty: Option<&str>) -> PlanRequest {
        PlanRequest {
            topic: topic.map(String::from),
            num_days,
            difficulty: difficulty.map(String::from),
        }
    }

    #[test]
    fn test_plan_complete() {
        let params = plan(Some("Algebra"), Some(3), Some("Easy")).validate().unwrap();
        assert_eq!(params.topic, "Algebra");
        assert_eq!(params.num_days, 3);
        assert_eq!(params.difficulty, "Easy");
    }

    #[test]
    fn test_plan_missing_or_falsy_fields() {
        assert!(plan(None, Some(3), Some("Easy")).validate().is_none());
        assert!(plan(Some("Algebra"), None, Some("Easy")).validate().is_none());
        assert!(plan(Some("Algebra"), Some(3), None).validate().is_none());
        assert!(plan(Some(""), Some(3), Some("Easy")).validate().is_none());
        assert!(plan(Some("Algebra"), Some(0), Some("Easy")).validate().is_none());
        assert!(plan(Some("Algebra"), Some(3), Some("  ")).validate().is_none());
    }

    #[test]
    fn test_quiz_requires_type() {
        let req = QuizRequest {
            topic: Some("Biology".into()),
            quiz_type: None,
            num_questions: Some(5),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_quiz_deserializes_from_json() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"topic": "Biology", "quiz_type": "Multiple Choice", "num_questions": 4}"#,
        )
        .unwrap();
        let params = req.validate().unwrap();
        assert_eq!(params.quiz_type, "Multiple Choice");
        assert_eq!(params.num_questions, 4);
    }

    #[test]
    fn test_null_field_is_missing() {
        let req: PlanRequest =
            serde_json::from_str(r#"{"topic": null, "num_days": 2, "difficulty": "Hard"}"#)
                .unwrap();
        assert!(req.validate().is_none());
    }
}
