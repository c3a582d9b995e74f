// ============================================================================
// EMPRESA SERVICE - Cadastro de empresas (suporte)
// ============================================================================

use serde_json::Value;

use crate::error::ActionError;
use crate::models::empresa::CompanyRegistration;
use crate::services::api_client::ApiClient;

const REGISTER_PATH: &str = "/empresas/cadastrar";
const DEFAULT_SUCCESS: &str = "Empresa cadastrada com sucesso!";

/// Valida, envia e devolve a mensagem de confirmação
pub async fn register_company(
    api: &ApiClient,
    form: &CompanyRegistration,
) -> Result<String, ActionError> {
    let problems = form.validate();
    if !problems.is_empty() {
        return Err(ActionError::Validation(problems));
    }

    let payload = form.normalized();
    log::info!("🏢 [EMPRESA] Cadastrando {} ({})", payload.nome, payload.cnpj);

    let body: Value = api.post(REGISTER_PATH, &payload).await?;

    // Alguns erros de negócio chegam com 2xx e `{error}`
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        log::warn!("⚠️ [EMPRESA] Cadastro recusado: {}", error);
        return Err(ActionError::Rejected(error.to_string()));
    }

    let message = ["message", "mensagem"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .unwrap_or(DEFAULT_SUCCESS)
        .to_string();
    log::info!("✅ [EMPRESA] {}", message);
    Ok(message)
}
