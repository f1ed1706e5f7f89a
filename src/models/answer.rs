// file: src/models/answer.rs
// description: answer and cited-source models for question responses
// reference: backend question contract (POST /api/question)

use crate::error::{ClientError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A citation returned alongside an answer. Only `id`, `filename` and `page`
/// are interpreted; every other field is kept as-is for raw display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Source {
    fields: Map<String, Value>,
}

impl Source {
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    pub fn filename(&self) -> Option<&Value> {
        self.fields.get("filename")
    }

    pub fn page(&self) -> Option<&Value> {
        self.fields.get("page")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Header line shown above the raw JSON of this source.
    pub fn summary(&self) -> String {
        format!(
            "{} {} page {}",
            display_value(self.id()),
            display_value(self.filename()),
            display_value(self.page())
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub answer: String,
    pub sources: Vec<Source>,
    /// The full response, verbatim.
    pub raw: Value,
}

impl AnswerResult {
    /// Interprets a question response. A missing or null `answer` becomes the
    /// empty string and a missing or null `sources` becomes an empty list; any
    /// other shape mismatch is reported as a transport failure.
    pub fn from_value(raw: Value) -> Result<Self> {
        let object = raw.as_object().ok_or_else(|| {
            ClientError::TransportFailed("question response is not a JSON object".to_string())
        })?;

        let answer = match object.get("answer") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        let sources = match object.get("sources") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(fields) => Ok(Source {
                        fields: fields.clone(),
                    }),
                    _ => Err(ClientError::TransportFailed(
                        "source entry is not a JSON object".to_string(),
                    )),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(ClientError::TransportFailed(
                    "sources is not a JSON array".to_string(),
                ));
            }
        };

        Ok(Self {
            answer,
            sources,
            raw,
        })
    }
}

/// Renders a scalar JSON value without quotes; missing or null shows as `-`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_answer_with_sources() {
        let raw = json!({
            "answer": "X is Y",
            "sources": [
                {"id": 1, "docId": "d1", "filename": "a.pdf", "page": 3, "distance": 0.12}
            ]
        });

        let result = AnswerResult::from_value(raw.clone()).unwrap();

        assert_eq!(result.answer, "X is Y");
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].summary(), "1 a.pdf page 3");
        assert_eq!(result.sources[0].fields().get("distance"), Some(&json!(0.12)));
        assert_eq!(result.raw, raw);
    }

    #[test]
    fn test_missing_fields_default() {
        let result = AnswerResult::from_value(json!({"answer": null})).unwrap();

        assert_eq!(result.answer, "");
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_source_with_missing_fields() {
        let result = AnswerResult::from_value(json!({
            "answer": "ok",
            "sources": [{"id": 2, "filename": null}]
        }))
        .unwrap();

        assert_eq!(result.sources[0].summary(), "2 - page -");
    }

    #[test]
    fn test_malformed_responses_are_transport_failures() {
        for raw in [
            json!("just a string"),
            json!({"answer": "a", "sources": "nope"}),
            json!({"answer": "a", "sources": [1, 2]}),
        ] {
            assert!(matches!(
                AnswerResult::from_value(raw),
                Err(ClientError::TransportFailed(_))
            ));
        }
    }

    #[test]
    fn test_source_serializes_verbatim() {
        let fields = json!({"id": 1, "filename": "a.pdf", "page": 2, "chunkId": "d1-p2-c0"});
        let result = AnswerResult::from_value(json!({"sources": [fields.clone()]})).unwrap();

        assert_eq!(serde_json::to_value(&result.sources[0]).unwrap(), fields);
    }
}
