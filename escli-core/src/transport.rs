//! HTTP-транспорт до кластера
//!
//! Команды работают через трейт [Transport], поэтому в тестах реальный клиент подменяется записывающей заглушкой.
use crate::prelude::*;
use reqwest::{blocking::Client, header::CONTENT_TYPE, Url};
use serde_json::Value;
use std::time::Duration;

/// Ответ сервера: статус и тело целиком
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    fn get(&self, url: &str) -> Result<Response>;
    fn post_json(&self, url: &str, body: &Value) -> Result<Response>;
}

/// Наибольший допустимый таймаут запроса: сутки
pub const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

pub struct HttpTransport(Client);

impl HttpTransport {
    /// Без `timeout` запрос ожидает ответа неограниченно долго
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        if let Some(timeout) = timeout {
            check_timeout(timeout)?;
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(ClientSetup)?;
        Ok(Self(client))
    }
}

/// Таймаут должен быть положительным и не больше [MAX_TIMEOUT]
pub fn check_timeout(timeout: Duration) -> Result<()> {
    if timeout.is_zero() {
        return Err(InvalidTimeout("timeout must be positive".to_string()).into());
    }
    if timeout > MAX_TIMEOUT {
        return Err(InvalidTimeout(format!(
            "{}s exceeds the limit of {}s",
            timeout.as_secs(),
            MAX_TIMEOUT.as_secs()
        ))
        .into());
    }
    Ok(())
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);
        let response = self.0.get(url).send().context(Request(url.to_string()))?;
        read_response(url, response)
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<Response> {
        let body = serde_json::to_string(body)?;
        debug!("POST {} {}", url, body);
        let response = self
            .0
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .context(Request(url.to_string()))?;
        read_response(url, response)
    }
}

fn read_response(url: &str, response: reqwest::blocking::Response) -> Result<Response> {
    let status = response.status().as_u16();
    let body = response.text().context(Request(url.to_string()))?;
    debug!("{} responded with {} ({} bytes)", url, status, body.len());
    Ok(Response { status, body })
}

/// Проверяет базовый URL кластера и отрезает завершающие `/`
pub fn normalize_host(host: &str) -> Result<String> {
    let url = Url::parse(host)
        .map_err(|e| anyhow::Error::new(e).context(InvalidHost(host.to_string())))?;
    if !matches!(url.scheme(), "http" | "https")
        || url.cannot_be_a_base()
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return Err(InvalidHost(host.to_string()).into());
    }
    Ok(host.trim_end_matches('/').to_string())
}

/// Склеивает базовый URL и путь запроса
pub fn endpoint(host: &str, path: &str) -> String {
    format!("{}/{}", host.trim_end_matches('/'), path)
}
