// ============================================================================
// HTTP TRANSPORT - Só envia bytes, sem regras de sessão
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Uma única tentativa por chamada: sem retry nem timeout
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// Transporte do navegador (fetch via gloo-net)
#[derive(Clone, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Request build error: {}", e))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        read_body(status, response.text().await)
    }
}

/// Corpo que não pôde ser lido é falha de transporte, nunca um corpo vazio
fn read_body<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> Result<HttpResponse, String> {
    body.map(|body| HttpResponse { status, body })
        .map_err(|e| format!("Body read error (HTTP {}): {}", status, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_body_is_a_transport_error() {
        let err = read_body(200, Err::<String, _>("stream aborted")).unwrap_err();
        assert_eq!(err, "Body read error (HTTP 200): stream aborted");
    }

    #[test]
    fn readable_body_keeps_status() {
        let response = read_body::<String>(204, Ok(String::new())).unwrap();
        assert_eq!(response, HttpResponse { status: 204, body: String::new() });
        assert!(response.ok());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://api.test".into(),
            headers: vec![("Authorization".into(), "Bearer x".into())],
            body: None,
        };
        assert_eq!(request.header("authorization"), Some("Bearer x"));
    }
}
