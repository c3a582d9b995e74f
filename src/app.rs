// ============================================================================
// APP - Descobre a página atual e liga a tela correspondente
// ============================================================================

use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::dom::body;
use crate::models::session::Nivel;
use crate::services::auth_service::require_session;
use crate::state::app_state::AppState;
use crate::views::{
    hide_loader, init_empresa_view, init_funcionario_view, init_layout, init_login_view,
    init_pontos_view,
};

/// Valor de `<body data-page="...">`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Funcionario,
    CadastroEmpresa,
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "login" => Ok(Page::Login),
            "dashboard" | "pontos" => Ok(Page::Dashboard),
            "funcionario" => Ok(Page::Funcionario),
            "cadastro-empresa" => Ok(Page::CadastroEmpresa),
            other => Err(format!("Página desconhecida: {}", other)),
        }
    }
}

impl Page {
    /// Níveis que podem abrir a página; vazio = pública
    pub fn allowed(&self) -> &'static [Nivel] {
        match self {
            Page::Login => &[],
            Page::Dashboard => &[Nivel::Admin],
            Page::Funcionario => &[Nivel::Funcionario],
            Page::CadastroEmpresa => &[Nivel::ItSupport],
        }
    }
}

pub struct App {
    state: AppState,
    page: Option<Page>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let page = body()
            .and_then(|b| b.get_attribute("data-page"))
            .and_then(|attr| match attr.parse::<Page>() {
                Ok(page) => Some(page),
                Err(e) => {
                    log::warn!("⚠️ [APP] {}", e);
                    None
                }
            });
        Self { state, page }
    }

    /// Liga layout e tela. Páginas protegidas sem sessão válida só redirecionam.
    pub fn start(&self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Iniciando página {:?}", self.page);

        if let Some(page) = self.page {
            if !page.allowed().is_empty() && require_session(&self.state, page.allowed()).is_none() {
                return Ok(());
            }
        }

        finish_loading(|| self.init_page(), hide_loader)
    }

    fn init_page(&self) -> Result<(), JsValue> {
        init_layout(&self.state)?;

        match self.page {
            Some(Page::Login) => init_login_view(&self.state),
            Some(Page::Dashboard) => init_pontos_view(&self.state),
            Some(Page::Funcionario) => init_funcionario_view(&self.state),
            Some(Page::CadastroEmpresa) => init_empresa_view(&self.state),
            None => Ok(()),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Roda a inicialização e esconde o loader mesmo se ela falhar
fn finish_loading<E: std::fmt::Debug>(
    init: impl FnOnce() -> Result<(), E>,
    hide: impl FnOnce(),
) -> Result<(), E> {
    let result = init();
    if let Err(e) = &result {
        log::error!("❌ [APP] Falha ao iniciar a página: {:?}", e);
    }
    hide();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn page_attribute_parses() {
        assert_eq!("login".parse::<Page>(), Ok(Page::Login));
        assert_eq!("pontos".parse::<Page>(), Ok(Page::Dashboard));
        assert_eq!(" cadastro-empresa ".parse::<Page>(), Ok(Page::CadastroEmpresa));
        assert!("relatorios".parse::<Page>().is_err());
    }

    #[test]
    fn each_protected_page_has_one_level() {
        assert!(Page::Login.allowed().is_empty());
        assert_eq!(Page::Dashboard.allowed(), &[Nivel::Admin]);
        assert_eq!(Page::Funcionario.allowed(), &[Nivel::Funcionario]);
        assert_eq!(Page::CadastroEmpresa.allowed(), &[Nivel::ItSupport]);
    }

    #[test]
    fn loader_hides_even_when_page_fails() {
        let hidden = Cell::new(false);

        let result = finish_loading(|| Err("#login-form ausente"), || hidden.set(true));

        assert_eq!(result, Err("#login-form ausente"));
        assert!(hidden.get());
    }

    #[test]
    fn loader_hides_after_success() {
        let hidden = Cell::new(false);

        assert_eq!(finish_loading(|| Ok::<(), String>(()), || hidden.set(true)), Ok(()));
        assert!(hidden.get());
    }
}
