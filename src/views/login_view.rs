// ============================================================================
// LOGIN VIEW - Formulário de login
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{field_value, get_element_by_id, on_submit, set_busy, show_message};
use crate::services::auth_service;
use crate::state::app_state::AppState;

pub const FORM_ID: &str = "login-form";
const ERROR_ID: &str = "login-error";
const SUBMIT_ID: &str = "login-submit";

pub fn init_login_view(state: &AppState) -> Result<(), JsValue> {
    // Sessão válida já aberta: vai direto para a página inicial
    if let Some(session) = state.session.load() {
        log::info!("🔁 [LOGIN] Sessão existente ({}), redirecionando", session.nivel());
        state.navigator.redirect(state.home_for(session.nivel()));
        return Ok(());
    }

    let form = get_element_by_id(FORM_ID)
        .ok_or_else(|| JsValue::from_str("No #login-form element found"))?;

    let state = state.clone();
    on_submit(&form, move || {
        let email = field_value("email");
        let senha = field_value("senha");
        let state = state.clone();

        show_message(ERROR_ID, "");
        set_busy(SUBMIT_ID, true);

        spawn_local(async move {
            if let Err(e) = auth_service::login(&state, &email, &senha).await {
                log::error!("❌ [LOGIN] {}", e);
                show_message(ERROR_ID, &e.to_string());
            }
            set_busy(SUBMIT_ID, false);
        });
    })
}
