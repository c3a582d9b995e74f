// ============================================================================
// API CLIENT - Envelope único de requisições autenticadas
// ============================================================================
// Anexa o token da sessão, serializa o corpo em JSON e normaliza os erros.
// 401 sempre limpa a sessão; só as chamadas autenticadas redirecionam ao login.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RequestError, GENERIC_ERROR_MESSAGE};
use crate::services::http::{HttpRequest, HttpTransport, Method};
use crate::services::navigator::Navigator;
use crate::state::session_state::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    login_page: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        login_page: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            login_page: login_page.into(),
            transport,
            session,
            navigator,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Chamada autenticada com corpo JSON opcional
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<T, RequestError> {
        let value = self.execute(path, method, body, true).await?;
        decode(value)
    }

    /// Chamada sem credencial e sem redirecionar no 401 (login)
    pub async fn request_public<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<T, RequestError> {
        let value = self.execute(path, method, body, false).await?;
        decode(value)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request(path, Method::Get, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        self.request(path, Method::Post, Some(to_json(body)?)).await
    }

    pub async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RequestError> {
        self.request_public(path, Method::Post, Some(to_json(body)?)).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request(path, Method::Put, None).await
    }

    async fn execute(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<Value, RequestError> {
        let url = self.url(path);
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];

        if authenticated {
            // Sem token armazenado o header é omitido, nunca "Bearer null"
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }

        let body = match body {
            Some(value) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(
                    serde_json::to_string(&value)
                        .map_err(|e| RequestError::Serialize(e.to_string()))?,
                )
            }
            None => None,
        };

        log::debug!("🌐 [API] {} {}", method.as_str(), url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body,
            })
            .await
            .map_err(|e| {
                log::error!("❌ [API] {} {} falhou: {}", method.as_str(), url, e);
                RequestError::Network(e)
            })?;

        if response.status == 401 {
            log::warn!("🔒 [API] 401 em {} - limpando sessão", url);
            self.session.clear();

            if authenticated {
                let message = server_message(&response.body)
                    .unwrap_or_else(|| "Sessão expirada. Faça login novamente.".to_string());
                self.navigator.redirect(&self.login_page);
                return Err(RequestError::Unauthorized { message });
            }
        }

        if !response.ok() {
            let message = server_message(&response.body)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            log::error!("❌ [API] HTTP {} em {}: {}", response.status, url, message);
            return Err(RequestError::Status {
                status: response.status,
                message,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| RequestError::Parse(e.to_string()))
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|e| RequestError::Serialize(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, RequestError> {
    serde_json::from_value(value).map_err(|e| RequestError::Parse(e.to_string()))
}

/// `message`, `error` ou `mensagem` do corpo JSON de erro
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error", "mensagem"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}
