//! Структуры ответов Elasticsearch REST API
//!
//! Описаны только те поля, которые нужны для вывода. Остальные ключи ответа игнорируются.
use serde::Deserialize;
use serde_json::{Map, Value};

/// Строка ответа `GET /_cat/indices?format=json`
#[derive(Deserialize, PartialEq, Eq, Debug)]
pub struct IndexEntry {
    #[serde(default)]
    pub health: String,
    #[serde(default)]
    pub status: String,
    pub index: String,
}

/// Найденный документ. Передается на печать как есть, без схемы.
pub type Hit = Map<String, Value>;

#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    pub hits: Hits,
}

#[derive(Deserialize, Debug)]
pub struct Hits {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// Тело ответа с ошибкой, которое Elasticsearch возвращает вместе с не-2xx статусом
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorCause,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ErrorCause {
    Detailed {
        #[serde(rename = "type", default)]
        kind: String,
        #[serde(default)]
        reason: Option<String>,
    },
    Plain(String),
}

impl ErrorCause {
    pub fn describe(&self) -> String {
        match self {
            ErrorCause::Detailed {
                kind,
                reason: Some(reason),
            } if !kind.is_empty() => format!("{}: {}", kind, reason),
            ErrorCause::Detailed {
                reason: Some(reason),
                ..
            } => reason.clone(),
            ErrorCause::Detailed { kind, reason: None } => kind.clone(),
            ErrorCause::Plain(reason) => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn read_index_entries() -> Result<()> {
        let entries: Vec<IndexEntry> = serde_json::from_str(
            r#"[
                {"health": "green", "status": "open", "index": "logs", "uuid": "x1", "pri": "1"},
                {"index": "metrics"}
            ]"#,
        )?;
        let expected = vec![
            IndexEntry {
                health: "green".to_string(),
                status: "open".to_string(),
                index: "logs".to_string(),
            },
            IndexEntry {
                health: String::new(),
                status: String::new(),
                index: "metrics".to_string(),
            },
        ];
        assert_eq!(entries, expected);
        Ok(())
    }

    #[test]
    fn read_search_response() -> Result<()> {
        let response: SearchResponse = serde_json::from_str(
            r#"{
                "took": 3,
                "timed_out": false,
                "hits": {
                    "total": {"value": 2, "relation": "eq"},
                    "hits": [
                        {"_index": "logs", "_id": "1", "_source": {"msg": "first"}},
                        {"_index": "logs", "_id": "2", "_source": {"msg": "second", "tags": [1, 2]}}
                    ]
                }
            }"#,
        )?;
        let ids = response
            .hits
            .hits
            .iter()
            .map(|hit| hit["_id"].as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![Some("1"), Some("2")]);
        assert_eq!(response.hits.hits[1]["_source"]["tags"][1], 2);
        Ok(())
    }

    #[test]
    fn search_response_requires_hits() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"error": "boom", "status": 500}"#);
        assert!(result.is_err());
    }

    #[test]
    fn describe_error_causes() -> Result<()> {
        let detailed: ErrorResponse = serde_json::from_str(
            r#"{"error": {"root_cause": [], "type": "index_not_found_exception", "reason": "no such index [nope]"}, "status": 404}"#,
        )?;
        assert_eq!(
            detailed.error.describe(),
            "index_not_found_exception: no such index [nope]"
        );

        let plain: ErrorResponse = serde_json::from_str(r#"{"error": "Incorrect HTTP method"}"#)?;
        assert_eq!(plain.error.describe(), "Incorrect HTTP method");
        Ok(())
    }
}
