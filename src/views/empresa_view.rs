// ============================================================================
// EMPRESA VIEW - Formulário de cadastro de empresas (IT_SUPPORT)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{alert, field_value, get_element_by_id, on_submit, reset_form, set_busy};
use crate::error::{ActionError, RequestError};
use crate::models::empresa::CompanyRegistration;
use crate::services::empresa_service;
use crate::state::app_state::AppState;

pub const FORM_ID: &str = "empresa-form";
const SUBMIT_ID: &str = "empresa-submit";

fn read_form() -> CompanyRegistration {
    CompanyRegistration {
        nome: field_value("nome"),
        cnpj: field_value("cnpj"),
        logradouro: field_value("logradouro"),
        numero: field_value("numero"),
        bairro: field_value("bairro"),
        cidade: field_value("cidade"),
        cep: field_value("cep"),
        id_estado: field_value("estado"),
        ramo_atividade: field_value("ramo_atividade"),
        email: field_value("email"),
    }
}

pub fn init_empresa_view(state: &AppState) -> Result<(), JsValue> {
    let form = get_element_by_id(FORM_ID)
        .ok_or_else(|| JsValue::from_str("No #empresa-form element found"))?;

    let state = state.clone();
    on_submit(&form, move || {
        let registration = read_form();
        let state = state.clone();
        set_busy(SUBMIT_ID, true);

        spawn_local(async move {
            match empresa_service::register_company(&state.api, &registration).await {
                Ok(message) => {
                    alert(&message);
                    reset_form(FORM_ID);
                }
                Err(ActionError::Request(RequestError::Unauthorized { .. })) => {}
                Err(e) => {
                    log::error!("❌ [EMPRESA] {}", e);
                    alert(&format!("Erro ao cadastrar empresa:\n{}", e));
                }
            }
            set_busy(SUBMIT_ID, false);
        });
    })
}
