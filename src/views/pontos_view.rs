// ============================================================================
// PONTOS VIEW - Revisão e aprovação de registros de ponto (ADMIN)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, field_value, get_element_by_id, on_input};
use crate::models::ponto::{PointRecord, PointStatus};
use crate::state::app_state::AppState;
use crate::utils::format::format_timestamp;
use crate::viewmodels::PontosViewModel;
use crate::views::table::{render_rows, Cell, RowAction, TableRow};

pub const TBODY_ID: &str = "pontos-tbody";
pub const FILTER_ID: &str = "filtro-pontos";
/// Funcionário, Data/Hora, Status, Ações
pub const COLUMNS: usize = 4;

const APPROVE: &str = "aprovar";
const REJECT: &str = "rejeitar";

/// Linhas da tabela; lista vazia vira uma linha de aviso
pub fn point_rows(records: &[PointRecord]) -> Vec<TableRow> {
    if records.is_empty() {
        return vec![TableRow::placeholder(COLUMNS, "Nenhum registro encontrado")];
    }

    records
        .iter()
        .map(|record| {
            let actions = if record.status.is_pending() {
                vec![
                    RowAction {
                        label: "Aprovar",
                        class: "btn btn-approve",
                        action: APPROVE,
                    },
                    RowAction {
                        label: "Rejeitar",
                        class: "btn btn-reject",
                        action: REJECT,
                    },
                ]
            } else {
                Vec::new()
            };

            let mut cells = vec![
                Cell::plain(record.employee_name.as_str()),
                Cell::plain(format_timestamp(&record.timestamp)),
                Cell::badge(record.status.as_str(), record.status.css_class()),
            ];
            // Mantém a coluna Ações alinhada mesmo sem botões
            if actions.is_empty() {
                cells.push(Cell::plain("—"));
            }

            TableRow::Data {
                id: record.id,
                cells,
                actions,
            }
        })
        .collect()
}

fn status_for_action(action: &str) -> Option<PointStatus> {
    match action {
        APPROVE => Some(PointStatus::Aprovado),
        REJECT => Some(PointStatus::Rejeitado),
        _ => None,
    }
}

/// Liga a tabela e o filtro da página de pontos
pub fn init_pontos_view(state: &AppState) -> Result<(), JsValue> {
    let tbody = get_element_by_id(TBODY_ID)
        .ok_or_else(|| JsValue::from_str("No #pontos-tbody element found"))?;
    let vm = PontosViewModel::new(state.api.clone());

    if let Some(filter) = get_element_by_id(FILTER_ID) {
        let vm = vm.clone();
        let tbody = tbody.clone();
        on_input(&filter, move |_| {
            let filtro = field_value(FILTER_ID);
            refresh(vm.clone(), tbody.clone(), Some(filtro));
        })?;
    }

    refresh(vm, tbody, None);
    Ok(())
}

/// Busca (com novo filtro, se houver) e redesenha
fn refresh(vm: PontosViewModel, tbody: Element, filtro: Option<String>) {
    spawn_local(async move {
        let result = match filtro {
            Some(filtro) => vm.search(&filtro).await,
            None => vm.reload().await,
        };
        match result {
            Ok(records) => draw(&vm, &tbody, &records),
            Err(e) if e.is_unauthorized() => {}
            Err(e) => {
                log::error!("❌ [PONTOS] Erro carregando registros: {}", e);
                alert(&format!("Erro ao carregar pontos: {}", e));
            }
        }
    });
}

fn draw(vm: &PontosViewModel, tbody: &Element, records: &[PointRecord]) {
    let rows = point_rows(records);
    let vm_for_actions = vm.clone();
    let tbody_for_actions = tbody.clone();

    let result = render_rows(tbody, &rows, move |id, action| {
        let Some(status) = status_for_action(action) else {
            return;
        };
        let vm = vm_for_actions.clone();
        let tbody = tbody_for_actions.clone();
        spawn_local(async move {
            match vm.decide(id, status).await {
                Ok(true) => draw(&vm, &tbody, &vm.records()),
                Ok(false) => alert("Não foi possível atualizar o status do ponto."),
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    log::error!("❌ [PONTOS] Erro atualizando {}: {}", id, e);
                    alert(&format!("Erro ao atualizar status: {}", e));
                }
            }
        });
    });

    if let Err(e) = result {
        log::error!("❌ [PONTOS] Erro renderizando tabela: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, status: PointStatus) -> PointRecord {
        PointRecord {
            id,
            employee_name: "João".into(),
            timestamp: "2024-03-01T08:00:00".into(),
            status,
        }
    }

    #[test]
    fn empty_list_renders_single_placeholder_spanning_all_columns() {
        let rows = point_rows(&[]);

        assert_eq!(rows.len(), 1);
        match &rows[0] {
            TableRow::Placeholder { colspan, .. } => assert_eq!(*colspan, COLUMNS),
            other => panic!("esperava placeholder, veio {:?}", other),
        }
    }

    #[test]
    fn only_pending_rows_get_actions() {
        let rows = point_rows(&[record(1, PointStatus::Pendente), record(2, PointStatus::Aprovado)]);

        match (&rows[0], &rows[1]) {
            (
                TableRow::Data { actions: pending, cells: pending_cells, .. },
                TableRow::Data { actions: done, cells: done_cells, .. },
            ) => {
                assert_eq!(pending.len(), 2);
                assert!(done.is_empty());
                assert_eq!(pending_cells.len() + 1, COLUMNS);
                assert_eq!(done_cells.len(), COLUMNS);
            }
            _ => panic!("esperava linhas de dados"),
        }
    }

    #[test]
    fn cells_carry_formatted_time_and_status_badge() {
        let rows = point_rows(&[record(1, PointStatus::Pendente)]);
        let TableRow::Data { cells, .. } = &rows[0] else {
            panic!("esperava linha de dados");
        };

        assert_eq!(cells[1].text, "01/03/2024 08:00");
        assert_eq!(cells[2], Cell::badge("Pendente", "status-pendente"));
    }

    #[test]
    fn actions_map_to_statuses() {
        assert_eq!(status_for_action("aprovar"), Some(PointStatus::Aprovado));
        assert_eq!(status_for_action("rejeitar"), Some(PointStatus::Rejeitado));
        assert_eq!(status_for_action("apagar"), None);
    }
}
