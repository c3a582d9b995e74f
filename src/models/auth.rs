use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_opt_id};

/// Corpo de `POST /usuarios/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Resposta de `POST /usuarios/login`
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub usuario: Option<UsuarioResumo>,
    #[serde(default)]
    pub nivel: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UsuarioResumo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id_empresa: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_string_ids() {
        let json = r#"{"nivel":"ADMIN","token":"jwt","usuario":{"id":"1","id_empresa":5}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        let usuario = resp.usuario.unwrap();
        assert_eq!(usuario.id, 1);
        assert_eq!(usuario.id_empresa, Some(5));
    }

    #[test]
    fn login_response_without_company() {
        let json = r#"{"nivel":"IT_SUPPORT","usuario":{"id":7,"id_empresa":null}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.usuario.unwrap().id_empresa, None);
        assert!(resp.token.is_none());
    }
}
