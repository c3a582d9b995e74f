// ============================================================================
// ERROS - Taxonomia de falhas do front end
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Mensagem usada quando o backend não devolve nenhuma
pub const GENERIC_ERROR_MESSAGE: &str = "Erro ao processar a requisição";

/// Falhas do envelope de requisições
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Falha de rede (servidor fora do ar, CORS, DNS...)
    #[error("Erro de conexão: {0}")]
    Network(String),

    /// Status fora da faixa 2xx com a mensagem do servidor
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 401: a sessão já foi limpa e o redirecionamento para o login disparado
    #[error("{message}")]
    Unauthorized { message: String },

    #[error("Resposta inválida do servidor: {0}")]
    Parse(String),

    #[error("Erro serializando requisição: {0}")]
    Serialize(String),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Unauthorized { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage indisponível")]
    Unavailable,

    #[error("Erro gravando a chave {0}")]
    Write(String),

    #[error("Erro removendo a chave {0}")]
    Remove(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Nível de acesso desconhecido: {0}")]
    UnknownNivel(String),

    #[error("Usuário {nivel} precisa estar vinculado a uma empresa")]
    MissingCompany { nivel: String },

    #[error("Usuário {nivel} não pode estar vinculado a uma empresa")]
    UnexpectedCompany { nivel: String },

    #[error("Resposta de login sem dados do usuário")]
    MissingUser,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Falha de uma ação de formulário (login, cadastro, solicitação)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Preenchimento inválido, nada foi enviado
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// O backend respondeu 2xx mas recusou a operação
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ActionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ActionError::Validation(vec![message.into()])
    }
}

impl From<RequestError> for JsValue {
    fn from(err: RequestError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_is_passed_through_verbatim() {
        let err = RequestError::Status {
            status: 422,
            message: "CNPJ já cadastrado".to_string(),
        };
        assert_eq!(err.to_string(), "CNPJ já cadastrado");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn validation_problems_are_listed_one_per_line() {
        let err = ActionError::Validation(vec!["Nome é obrigatório".into(), "E-mail inválido".into()]);
        assert_eq!(err.to_string(), "Nome é obrigatório\nE-mail inválido");
    }

    #[test]
    fn unauthorized_reports_401() {
        let err = RequestError::Unauthorized {
            message: "Token expirado".to_string(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert_eq!(RequestError::Network("offline".into()).status(), None);
    }
}
