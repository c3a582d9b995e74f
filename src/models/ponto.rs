use std::fmt;

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Situação de um registro de ponto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointStatus {
    Pendente,
    Aprovado,
    Rejeitado,
}

impl PointStatus {
    /// Valor usado no path de `atualizar-status`
    pub fn as_str(&self) -> &'static str {
        match self {
            PointStatus::Pendente => "Pendente",
            PointStatus::Aprovado => "Aprovado",
            PointStatus::Rejeitado => "Rejeitado",
        }
    }

    /// Classe CSS do badge
    pub fn css_class(&self) -> &'static str {
        match self {
            PointStatus::Pendente => "status-pendente",
            PointStatus::Aprovado => "status-aprovado",
            PointStatus::Rejeitado => "status-rejeitado",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PointStatus::Pendente)
    }
}

impl fmt::Display for PointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registro de ponto exibido na tela de aprovação
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "nome_funcionario", alias = "employeeName", alias = "nome")]
    pub employee_name: String,
    #[serde(rename = "data_hora", alias = "timestamp", alias = "horario")]
    pub timestamp: String,
    pub status: PointStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
