use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Resposta de `GET /funcionario/perfil`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub empresa: Option<String>,
    #[serde(default)]
    pub data_admissao: Option<String>,
}

/// Item de `GET /registros`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(alias = "timestamp", alias = "horario")]
    pub data_hora: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Solicitação de alteração de horário de um registro
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRequest {
    #[serde(rename = "idRegistro")]
    pub record_id: i64,
    #[serde(rename = "novoHorario")]
    pub new_time: String,
    #[serde(rename = "motivo")]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeRequestResponse {
    #[serde(default)]
    pub mensagem: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_request_uses_backend_field_names() {
        let req = ChangeRequest {
            record_id: 12,
            new_time: "2024-03-01T08:00".into(),
            reason: "Esqueci de bater".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["idRegistro"], 12);
        assert_eq!(value["novoHorario"], "2024-03-01T08:00");
        assert_eq!(value["motivo"], "Esqueci de bater");
    }

    #[test]
    fn profile_optional_fields_default_to_none() {
        let json = r#"{"id":2,"nome":"Maria","email":"maria@x.com"}"#;
        let profile: EmployeeProfile = serde_json::from_str(json).unwrap();
        assert!(profile.cargo.is_none());
    }
}
