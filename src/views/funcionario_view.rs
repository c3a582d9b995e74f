// ============================================================================
// FUNCIONARIO VIEW - Perfil, registros de ponto e solicitação de alteração
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    alert, append_child, clear_children, field_value, get_element_by_id, on_submit, reset_form,
    set_busy, set_field_value, ElementBuilder,
};
use crate::error::ActionError;
use crate::models::funcionario::{AttendanceRecord, ChangeRequest, EmployeeProfile};
use crate::services::funcionario_service;
use crate::state::app_state::AppState;
use crate::utils::format::format_timestamp;
use crate::views::table::{render_rows, Cell, RowAction, TableRow};

pub const PROFILE_ID: &str = "perfil-funcionario";
pub const RECORDS_TBODY_ID: &str = "registros-tbody";
pub const FORM_ID: &str = "alteracao-form";
const RECORD_FIELD: &str = "registro-id";
const TIME_FIELD: &str = "novo-horario";
const REASON_FIELD: &str = "motivo";
const SUBMIT_ID: &str = "alteracao-submit";

/// Data/Hora, Tipo, Status, Ações
pub const RECORD_COLUMNS: usize = 4;
const REQUEST_CHANGE: &str = "solicitar";

/// Pares rótulo/valor do cartão de perfil; campos ausentes não aparecem
pub fn profile_fields(profile: &EmployeeProfile) -> Vec<(&'static str, String)> {
    let mut fields = vec![("Nome", profile.nome.clone()), ("E-mail", profile.email.clone())];
    if let Some(cargo) = &profile.cargo {
        fields.push(("Cargo", cargo.clone()));
    }
    if let Some(empresa) = &profile.empresa {
        fields.push(("Empresa", empresa.clone()));
    }
    if let Some(admissao) = &profile.data_admissao {
        fields.push(("Admissão", format_timestamp(admissao)));
    }
    fields
}

pub fn record_rows(records: &[AttendanceRecord]) -> Vec<TableRow> {
    if records.is_empty() {
        return vec![TableRow::placeholder(RECORD_COLUMNS, "Nenhum registro de ponto")];
    }

    records
        .iter()
        .map(|record| TableRow::Data {
            id: record.id,
            cells: vec![
                Cell::plain(format_timestamp(&record.data_hora)),
                Cell::plain(record.tipo.clone().unwrap_or_else(|| "—".to_string())),
                Cell::plain(record.status.clone().unwrap_or_else(|| "—".to_string())),
            ],
            actions: vec![RowAction {
                label: "Solicitar alteração",
                class: "btn btn-secondary",
                action: REQUEST_CHANGE,
            }],
        })
        .collect()
}

/// Monta o payload a partir dos valores crus do formulário
pub fn change_request_from_fields(record_id: &str, new_time: &str, reason: &str) -> Result<ChangeRequest, ActionError> {
    let record_id = record_id
        .trim()
        .parse::<i64>()
        .map_err(|_| ActionError::invalid("Selecione um registro"))?;
    Ok(ChangeRequest {
        record_id,
        new_time: new_time.trim().to_string(),
        reason: reason.trim().to_string(),
    })
}

pub fn init_funcionario_view(state: &AppState) -> Result<(), JsValue> {
    if let Some(container) = get_element_by_id(PROFILE_ID) {
        load_profile(state.clone(), container);
    }

    if let Some(tbody) = get_element_by_id(RECORDS_TBODY_ID) {
        load_records(state.clone(), tbody);
    }

    if let Some(form) = get_element_by_id(FORM_ID) {
        let state = state.clone();
        on_submit(&form, move || submit_change_request(state.clone()))?;
    }

    Ok(())
}

fn load_profile(state: AppState, container: Element) {
    spawn_local(async move {
        match funcionario_service::fetch_profile(&state.api).await {
            Ok(profile) => {
                if let Err(e) = render_profile(&container, &profile) {
                    log::error!("❌ [PERFIL] Erro renderizando: {:?}", e);
                }
            }
            Err(e) if e.is_unauthorized() => {}
            Err(e) => {
                log::error!("❌ [PERFIL] {}", e);
                clear_children(&container);
                let fallback = ElementBuilder::new("p").and_then(|p| {
                    let p = p.class("empty-message").text("Não foi possível carregar o perfil.").build();
                    append_child(&container, &p)
                });
                if let Err(e) = fallback {
                    log::error!("❌ [PERFIL] Erro renderizando aviso: {:?}", e);
                }
            }
        }
    });
}

fn render_profile(container: &Element, profile: &EmployeeProfile) -> Result<(), JsValue> {
    clear_children(container);
    let dl = ElementBuilder::new("dl")?.class("profile-fields").build();
    for (label, value) in profile_fields(profile) {
        append_child(&dl, &ElementBuilder::new("dt")?.text(label).build())?;
        append_child(&dl, &ElementBuilder::new("dd")?.text(&value).build())?;
    }
    append_child(container, &dl)
}

fn load_records(state: AppState, tbody: Element) {
    spawn_local(async move {
        match funcionario_service::fetch_records(&state.api).await {
            Ok(records) => {
                let result = render_rows(&tbody, &record_rows(&records), |id, action| {
                    if action == REQUEST_CHANGE {
                        set_field_value(RECORD_FIELD, &id.to_string());
                        if let Some(field) = get_element_by_id(TIME_FIELD) {
                            field.scroll_into_view();
                        }
                    }
                });
                if let Err(e) = result {
                    log::error!("❌ [REGISTROS] Erro renderizando: {:?}", e);
                }
            }
            Err(e) if e.is_unauthorized() => {}
            Err(e) => {
                log::error!("❌ [REGISTROS] {}", e);
                alert(&format!("Erro ao carregar registros: {}", e));
            }
        }
    });
}

fn submit_change_request(state: AppState) {
    let request = match change_request_from_fields(
        &field_value(RECORD_FIELD),
        &field_value(TIME_FIELD),
        &field_value(REASON_FIELD),
    ) {
        Ok(request) => request,
        Err(e) => {
            alert(&e.to_string());
            return;
        }
    };

    set_busy(SUBMIT_ID, true);
    spawn_local(async move {
        match funcionario_service::request_change(&state.api, &request).await {
            Ok(message) => {
                alert(&message);
                reset_form(FORM_ID);
            }
            Err(ActionError::Request(e)) if e.is_unauthorized() => {}
            Err(e) => {
                log::error!("❌ [ALTERACAO] {}", e);
                alert(&format!("Erro ao enviar solicitação: {}", e));
            }
        }
        set_busy(SUBMIT_ID, false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_records_render_placeholder() {
        let rows = record_rows(&[]);
        assert_eq!(rows, vec![TableRow::placeholder(RECORD_COLUMNS, "Nenhum registro de ponto")]);
    }

    #[test]
    fn record_row_has_change_action() {
        let rows = record_rows(&[AttendanceRecord {
            id: 8,
            data_hora: "2024-03-01T12:00:00".into(),
            tipo: Some("Saída".into()),
            status: None,
        }]);
        let TableRow::Data { id, cells, actions } = &rows[0] else {
            panic!("esperava linha de dados");
        };
        assert_eq!(*id, 8);
        assert_eq!(cells[0].text, "01/03/2024 12:00");
        assert_eq!(cells[2].text, "—");
        assert_eq!(actions[0].action, REQUEST_CHANGE);
    }

    #[test]
    fn profile_skips_missing_fields() {
        let profile = EmployeeProfile {
            id: 1,
            nome: "Maria".into(),
            email: "m@x.com".into(),
            cargo: Some("Caixa".into()),
            empresa: None,
            data_admissao: None,
        };
        let labels: Vec<&str> = profile_fields(&profile).into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Nome", "E-mail", "Cargo"]);
    }

    #[test]
    fn change_request_needs_numeric_record() {
        assert!(matches!(
            change_request_from_fields("", "08:00", "x"),
            Err(ActionError::Validation(_))
        ));
        let req = change_request_from_fields(" 12 ", " 08:00 ", " atraso ").unwrap();
        assert_eq!(req.record_id, 12);
        assert_eq!(req.reason, "atraso");
    }
}
