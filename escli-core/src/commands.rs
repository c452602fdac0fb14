//! Операции над кластером: список индексов, поиск и получение документа по id
//!
//! Каждая операция выполняет ровно один HTTP-запрос и печатает результат в переданный [Write].
use crate::{
    model::{ErrorResponse, IndexEntry, SearchResponse},
    prelude::*,
    printer,
    transport::{endpoint, Response, Transport},
};
use fn_error_context::context;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::io::Write;

/// Размер страницы поиска. Не настраивается.
pub const PAGE_SIZE: u64 = 15;

pub fn search_body() -> Value {
    json!({ "size": PAGE_SIZE })
}

/// Запрос документа по `_id` через `_search`.
///
/// Прямой `GET /{index}/_doc/{id}` не работает для алиасов над несколькими индексами
/// и требует routing, которого у нас нет. Поиск по `_id` обходит оба ограничения.
pub fn document_body(id: &str) -> Value {
    json!({ "query": { "match": { "_id": id } } })
}

fn search_path(index: &str) -> String {
    format!("{}/_search?format=json", index)
}

#[context("Listing indices")]
pub fn list_indices(client: &impl Transport, host: &str, out: &mut impl Write) -> Result<()> {
    let url = endpoint(host, "_cat/indices?format=json");
    let response = client.get(&url)?;
    let entries: Vec<IndexEntry> = decode(&url, &response)?;

    let mut names = entries.into_iter().map(|e| e.index).collect::<Vec<_>>();
    names.sort();
    printer::index_names(out, &names).context(WritingOutput)?;
    Ok(())
}

#[context("Searching index <{}>", index)]
pub fn search_index(
    client: &impl Transport,
    host: &str,
    index: &str,
    out: &mut impl Write,
) -> Result<()> {
    let url = endpoint(host, &search_path(index));
    let response = client.post_json(&url, &search_body())?;
    let search: SearchResponse = decode(&url, &response)?;

    printer::search_summary(out, response.status, search.hits.hits.len())
        .context(WritingOutput)?;
    printer::hits(out, &search.hits.hits).context(WritingOutput)
}

#[context("Retrieving document <{}> from <{}>", id, index)]
pub fn get_document(
    client: &impl Transport,
    host: &str,
    index: &str,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let url = endpoint(host, &search_path(index));
    let response = client.post_json(&url, &document_body(id))?;
    let search: SearchResponse = decode(&url, &response)?;

    if search.hits.hits.is_empty() {
        info!("No documents with id {} in {}", id, index);
    }
    printer::hits(out, &search.hits.hits).context(WritingOutput)
}

/// Разбирает тело ответа.
///
/// Если тело не подходит под ожидаемую схему, а статус не 2xx, отказ считается ошибкой HTTP
/// и в сообщение попадает причина из ответа Elasticsearch.
fn decode<T: DeserializeOwned>(url: &str, response: &Response) -> Result<T> {
    match serde_json::from_str(&response.body) {
        Ok(value) => Ok(value),
        Err(_) if !response.is_success() => {
            Err(HttpStatus(url.to_string(), response.status, error_reason(&response.body)).into())
        }
        Err(e) => Err(anyhow::Error::new(e).context(Decode(url.to_string()))),
    }
}

fn error_reason(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => response.error.describe(),
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
