use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Nível de acesso do usuário
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Nivel {
    Admin,
    Funcionario,
    ItSupport,
}

impl Nivel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nivel::Admin => "ADMIN",
            Nivel::Funcionario => "FUNCIONARIO",
            Nivel::ItSupport => "IT_SUPPORT",
        }
    }

    /// ADMIN e FUNCIONARIO pertencem a uma empresa; o suporte não
    pub fn requires_company(&self) -> bool {
        matches!(self, Nivel::Admin | Nivel::Funcionario)
    }
}

impl fmt::Display for Nivel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nivel {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ADMIN" => Ok(Nivel::Admin),
            "FUNCIONARIO" => Ok(Nivel::Funcionario),
            "IT_SUPPORT" => Ok(Nivel::ItSupport),
            other => Err(SessionError::UnknownNivel(other.to_string())),
        }
    }
}

/// Sessão autenticada. O token pode faltar quando o backend autentica
/// por cookie; nesse caso nenhuma credencial é anexada às requisições.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    nivel: Nivel,
    user_id: i64,
    company_id: Option<i64>,
}

impl Session {
    /// Valida `company_id` presente se e somente se o nível exige empresa
    pub fn new(
        token: Option<String>,
        nivel: Nivel,
        user_id: i64,
        company_id: Option<i64>,
    ) -> Result<Self, SessionError> {
        match (nivel.requires_company(), company_id) {
            (true, None) => Err(SessionError::MissingCompany {
                nivel: nivel.to_string(),
            }),
            (false, Some(_)) => Err(SessionError::UnexpectedCompany {
                nivel: nivel.to_string(),
            }),
            _ => Ok(Self {
                token: token.filter(|t| !t.is_empty()),
                nivel,
                user_id,
                company_id,
            }),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn nivel(&self) -> Nivel {
        self.nivel
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn company_id(&self) -> Option<i64> {
        self.company_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nivel_parses_backend_strings() {
        assert_eq!("ADMIN".parse::<Nivel>().unwrap(), Nivel::Admin);
        assert_eq!("IT_SUPPORT".parse::<Nivel>().unwrap(), Nivel::ItSupport);
        assert!(matches!(
            "GERENTE".parse::<Nivel>(),
            Err(SessionError::UnknownNivel(_))
        ));
    }

    #[test]
    fn nivel_serde_matches_backend() {
        let json = serde_json::to_string(&Nivel::Funcionario).unwrap();
        assert_eq!(json, "\"FUNCIONARIO\"");
        let nivel: Nivel = serde_json::from_str("\"IT_SUPPORT\"").unwrap();
        assert_eq!(nivel, Nivel::ItSupport);
    }

    #[test]
    fn company_required_for_admin_and_funcionario() {
        assert!(Session::new(Some("t".into()), Nivel::Admin, 1, Some(5)).is_ok());
        assert!(matches!(
            Session::new(Some("t".into()), Nivel::Funcionario, 1, None),
            Err(SessionError::MissingCompany { .. })
        ));
    }

    #[test]
    fn support_cannot_carry_company() {
        assert!(Session::new(Some("t".into()), Nivel::ItSupport, 9, None).is_ok());
        assert!(matches!(
            Session::new(Some("t".into()), Nivel::ItSupport, 9, Some(3)),
            Err(SessionError::UnexpectedCompany { .. })
        ));
    }
}
