// ============================================================================
// APP STATE - Dependências compartilhadas por todas as telas
// ============================================================================

use std::rc::Rc;

use crate::config::{AppConfig, PagesConfig, CONFIG};
use crate::models::session::Nivel;
use crate::services::api_client::ApiClient;
use crate::services::http::{FetchTransport, HttpTransport};
use crate::services::navigator::{BrowserNavigator, Navigator};
use crate::services::sidebar_service::SidebarStore;
use crate::services::theme_service::ThemeStore;
use crate::state::session_state::SessionStore;
use crate::utils::storage::{BrowserStorage, KeyValueStore};

/// Estado injetado na inicialização de cada tela
#[derive(Clone)]
pub struct AppState {
    pub storage: Rc<dyn KeyValueStore>,
    pub session: SessionStore,
    pub api: ApiClient,
    pub navigator: Rc<dyn Navigator>,
    pub pages: PagesConfig,
}

impl AppState {
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        transport: Rc<dyn HttpTransport>,
        navigator: Rc<dyn Navigator>,
        config: &AppConfig,
    ) -> Self {
        let session = SessionStore::new(storage.clone());
        let api = ApiClient::new(
            config.api_base_url.clone(),
            config.pages.login.clone(),
            transport,
            session.clone(),
            navigator.clone(),
        );
        Self {
            storage,
            session,
            api,
            navigator,
            pages: config.pages.clone(),
        }
    }

    /// Estado ligado ao localStorage, fetch e window.location
    pub fn browser() -> Self {
        Self::new(
            Rc::new(BrowserStorage::new()),
            Rc::new(FetchTransport::new()),
            Rc::new(BrowserNavigator::new()),
            &CONFIG,
        )
    }

    pub fn theme(&self) -> ThemeStore {
        ThemeStore::new(self.storage.clone())
    }

    pub fn sidebar(&self) -> SidebarStore {
        SidebarStore::new(self.storage.clone())
    }

    /// Página inicial de cada nível após o login
    pub fn home_for(&self, nivel: Nivel) -> &str {
        match nivel {
            Nivel::Admin => &self.pages.admin_home,
            Nivel::Funcionario => &self.pages.funcionario_home,
            Nivel::ItSupport => &self.pages.suporte_home,
        }
    }

    pub fn go_to_login(&self) {
        self.navigator.redirect(&self.pages.login);
    }
}
