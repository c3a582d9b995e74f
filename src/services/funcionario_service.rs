// ============================================================================
// FUNCIONARIO SERVICE - Perfil, registros e solicitações de alteração
// ============================================================================

use crate::error::{ActionError, RequestError};
use crate::models::funcionario::{AttendanceRecord, ChangeRequest, ChangeRequestResponse, EmployeeProfile};
use crate::services::api_client::ApiClient;

const DEFAULT_CHANGE_MESSAGE: &str = "Solicitação enviada com sucesso!";

pub async fn fetch_profile(api: &ApiClient) -> Result<EmployeeProfile, RequestError> {
    api.get("/funcionario/perfil").await
}

pub async fn fetch_records(api: &ApiClient) -> Result<Vec<AttendanceRecord>, RequestError> {
    let records: Vec<AttendanceRecord> = api.get("/registros").await?;
    log::info!("🕒 [REGISTROS] {} registros carregados", records.len());
    Ok(records)
}

/// Envia a solicitação e devolve a `mensagem` do backend
pub async fn request_change(api: &ApiClient, request: &ChangeRequest) -> Result<String, ActionError> {
    let mut problems = Vec::new();
    if request.record_id <= 0 {
        problems.push("Selecione um registro".to_string());
    }
    if request.new_time.trim().is_empty() {
        problems.push("Informe o novo horário".to_string());
    }
    if request.reason.trim().is_empty() {
        problems.push("Informe o motivo".to_string());
    }
    if !problems.is_empty() {
        return Err(ActionError::Validation(problems));
    }

    log::info!("✏️ [ALTERACAO] Solicitando alteração do registro {}", request.record_id);
    let response: Option<ChangeRequestResponse> = api.post("/solicitar_alteracao", request).await?;

    Ok(response
        .and_then(|r| r.mensagem)
        .unwrap_or_else(|| DEFAULT_CHANGE_MESSAGE.to_string()))
}
