// ============================================================================
// AUTH SERVICE - Login, logout e guarda de páginas
// ============================================================================

use crate::error::{ActionError, SessionError};
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::session::{Nivel, Session};
use crate::state::app_state::AppState;

const LOGIN_PATH: &str = "/usuarios/login";

/// Autentica, persiste a sessão e navega para a página inicial do nível
pub async fn login(state: &AppState, email: &str, senha: &str) -> Result<Session, ActionError> {
    let email = email.trim();
    if email.is_empty() || senha.is_empty() {
        return Err(ActionError::invalid("Preencha e-mail e senha"));
    }

    log::info!("🔐 [LOGIN] Autenticando {}", email);

    let request = LoginRequest {
        email: email.to_string(),
        senha: senha.to_string(),
    };
    let response: LoginResponse = state.api.post_public(LOGIN_PATH, &request).await?;

    let session = session_from_response(response)?;
    state.session.create(&session)?;

    log::info!("✅ [LOGIN] Login ok como {}", session.nivel());
    state.navigator.redirect(state.home_for(session.nivel()));
    Ok(session)
}

fn session_from_response(response: LoginResponse) -> Result<Session, ActionError> {
    let usuario = match response.usuario {
        Some(usuario) => usuario,
        None => {
            return Err(match response.message {
                Some(message) => ActionError::Rejected(message),
                None => SessionError::MissingUser.into(),
            })
        }
    };

    let nivel: Nivel = response
        .nivel
        .as_deref()
        .unwrap_or_default()
        .parse()?;

    // O backend às vezes devolve id_empresa para o suporte; só conta para quem pertence a empresa
    let company_id = if nivel.requires_company() {
        usuario.id_empresa
    } else {
        if usuario.id_empresa.is_some() {
            log::warn!("⚠️ [LOGIN] id_empresa ignorado para {}", nivel);
        }
        None
    };

    Ok(Session::new(response.token, nivel, usuario.id, company_id)?)
}

/// Limpa a sessão e volta ao login
pub fn logout(state: &AppState) {
    log::info!("👋 [LOGOUT] Saindo");
    state.session.clear();
    state.go_to_login();
}

/// Sessão atual se o nível for permitido na página; senão redireciona ao login
pub fn require_session(state: &AppState, allowed: &[Nivel]) -> Option<Session> {
    match state.session.load() {
        Some(session) if allowed.contains(&session.nivel()) => Some(session),
        Some(session) => {
            log::warn!("🚫 [AUTH] {} sem acesso a esta página", session.nivel());
            state.navigator.redirect(state.home_for(session.nivel()));
            None
        }
        None => {
            log::warn!("🚫 [AUTH] Sem sessão, voltando ao login");
            state.go_to_login();
            None
        }
    }
}
