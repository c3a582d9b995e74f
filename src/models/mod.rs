pub mod auth;
pub mod session;
pub mod ponto;
pub mod empresa;
pub mod funcionario;

pub use auth::{LoginRequest, LoginResponse, UsuarioResumo};
pub use session::{Nivel, Session};
pub use ponto::{PointRecord, PointStatus, UpdateStatusResponse};
pub use empresa::CompanyRegistration;
pub use funcionario::{AttendanceRecord, ChangeRequest, ChangeRequestResponse, EmployeeProfile};

use serde::{Deserialize, Deserializer};

/// IDs chegam do backend como número ou como string numérica
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Num(n) => Ok(n),
        RawId::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_id")] i64);

    Option::<Wrapper>::deserialize(deserializer).map(|w| w.map(|Wrapper(id)| id))
}
