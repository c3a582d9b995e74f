// Chaves persistidas no localStorage (lidas também por scripts legados)

pub const TOKEN_KEY: &str = "token";
pub const NIVEL_KEY: &str = "nivel";
pub const USER_ID_KEY: &str = "id_usuario";
pub const COMPANY_ID_KEY: &str = "id_empresa";

pub const THEME_KEY: &str = "themeMode";
/// Chave antiga do segundo toggle de tema, só leitura
pub const LEGACY_THEME_KEY: &str = "colorMode";
pub const SIDEBAR_KEY: &str = "sidebarCollapsed";

/// Chaves que formam a sessão, removidas juntas no logout
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, NIVEL_KEY, USER_ID_KEY, COMPANY_ID_KEY];
