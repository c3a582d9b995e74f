// ============================================================================
// FORMS - Leitura de campos e avisos ao usuário
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{get_element_by_id, set_text_content, window, ClassTarget};

/// Valor de um input, select ou textarea pelo ID (vazio se não existir)
pub fn field_value(id: &str) -> String {
    let Some(element) = get_element_by_id(id) else {
        log::warn!("⚠️ [FORM] Campo #{} não encontrado", id);
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(id: &str, value: &str) {
    let Some(element) = get_element_by_id(id) else {
        return;
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
}

pub fn reset_form(id: &str) {
    if let Some(form) = get_element_by_id(id).and_then(|e| e.dyn_into::<HtmlFormElement>().ok()) {
        form.reset();
    }
}

/// Alerta bloqueante do navegador
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("❌ [ALERT] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [ALERT] Sem window: {}", message),
    }
}

/// Mensagem inline: texto + classe `visible`; string vazia esconde
pub fn show_message(id: &str, message: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, message);
        if message.is_empty() {
            element.remove_class("visible");
        } else {
            element.add_class("visible");
        }
    }
}

/// Desabilita o botão de envio enquanto a requisição está em andamento
pub fn set_busy(button_id: &str, busy: bool) {
    if let Some(button) = get_element_by_id(button_id) {
        let result = if busy {
            button.set_attribute("disabled", "true")
        } else {
            button.remove_attribute("disabled")
        };
        if let Err(e) = result {
            log::warn!("⚠️ [FORM] {:?}", e);
        }
    }
}
