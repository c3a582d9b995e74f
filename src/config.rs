use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub pages: PagesConfig,
}

/// Caminhos das páginas HTML servidas junto com o bundle WASM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    pub login: String,
    pub admin_home: String,
    pub funcionario_home: String,
    pub suporte_home: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            login: "index.html".to_string(),
            admin_home: "dashboard.html".to_string(),
            funcionario_home: "funcionario.html".to_string(),
            suporte_home: "cadastro-empresa.html".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            pages: PagesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carrega a configuração das variáveis de ambiente em tempo de compilação
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            pages: PagesConfig {
                login: option_env!("LOGIN_PAGE")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.login),
                admin_home: option_env!("ADMIN_HOME")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.admin_home),
                funcionario_home: option_env!("FUNCIONARIO_HOME")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.funcionario_home),
                suporte_home: option_env!("SUPORTE_HOME")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.suporte_home),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nível mínimo de log para o wasm-logger
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Error,
            (true, true) => log::Level::Warn,
            (true, false) => log::Level::Debug,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pages_point_to_html_files() {
        let pages = PagesConfig::default();
        assert_eq!(pages.login, "index.html");
        assert_eq!(pages.admin_home, "dashboard.html");
    }

    #[test]
    fn log_level_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.environment = "production".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
