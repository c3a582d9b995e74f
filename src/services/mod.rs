// ============================================================================
// SERVICES - Comunicação com a API e estado cosmético persistido
// ============================================================================

pub mod http;
pub mod navigator;
pub mod api_client;
pub mod auth_service;
pub mod ponto_service;
pub mod empresa_service;
pub mod funcionario_service;
pub mod theme_service;
pub mod sidebar_service;

pub use api_client::ApiClient;
pub use http::{FetchTransport, HttpRequest, HttpResponse, HttpTransport, Method};
pub use navigator::{BrowserNavigator, Navigator};
pub use sidebar_service::SidebarStore;
pub use theme_service::{Theme, ThemeStore};
