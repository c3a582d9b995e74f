// ============================================================================
// PONTO SERVICE - Registros de ponto da empresa (revisão/aprovação)
// ============================================================================

use crate::error::RequestError;
use crate::models::ponto::{PointRecord, PointStatus, UpdateStatusResponse};
use crate::services::api_client::ApiClient;

const PENDING_PATH: &str = "/empresas/carregar-pontos-pendentes";
const SEARCH_PATH: &str = "/empresas/buscar-pontos";

/// Endpoint da listagem: pendentes sem filtro, busca com filtro codificado
pub fn list_path(filtro: &str) -> String {
    let filtro = filtro.trim();
    if filtro.is_empty() {
        PENDING_PATH.to_string()
    } else {
        format!("{}?filtro={}", SEARCH_PATH, urlencoding::encode(filtro))
    }
}

pub async fn fetch_points(api: &ApiClient, filtro: &str) -> Result<Vec<PointRecord>, RequestError> {
    let path = list_path(filtro);
    let records: Vec<PointRecord> = api.get(&path).await?;
    log::info!("📋 [PONTOS] {} registros ({})", records.len(), path);
    Ok(records)
}

/// `true` quando o backend confirma a troca de status
pub async fn update_status(
    api: &ApiClient,
    id: i64,
    status: PointStatus,
) -> Result<bool, RequestError> {
    let path = format!("/empresas/atualizar-status/{}/{}", id, status.as_str());
    let response: UpdateStatusResponse = api.put(&path).await?;
    if response.success {
        log::info!("✅ [PONTOS] Registro {} -> {}", id, status);
    } else {
        log::warn!(
            "⚠️ [PONTOS] Backend recusou {} -> {}: {:?}",
            id,
            status,
            response.message
        );
    }
    Ok(response.success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::Method;
    use crate::testing::{json_response, Harness};

    #[test]
    fn empty_filter_uses_pending_endpoint() {
        assert_eq!(list_path(""), "/empresas/carregar-pontos-pendentes");
        assert_eq!(list_path("   "), "/empresas/carregar-pontos-pendentes");
    }

    #[test]
    fn filter_is_url_encoded() {
        assert_eq!(list_path("joao"), "/empresas/buscar-pontos?filtro=joao");
        assert_eq!(
            list_path("joão silva&co"),
            "/empresas/buscar-pontos?filtro=jo%C3%A3o%20silva%26co"
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn fetch_points_hits_search_endpoint() {
        let h = Harness::new(|_| {
            json_response(
                200,
                r#"[{"id":1,"nome_funcionario":"João","data_hora":"2024-03-01T08:00:00","status":"Pendente"}]"#,
            )
        });

        let records = fetch_points(&h.api, "joao").await.unwrap();

        assert_eq!(records.len(), 1);
        let sent = h.transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/empresas/buscar-pontos?filtro=joao");
        assert_eq!(sent.method, Method::Get);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn update_status_puts_to_status_path() {
        let h = Harness::new(|_| json_response(200, r#"{"success":true}"#));

        assert!(update_status(&h.api, 7, PointStatus::Rejeitado).await.unwrap());

        let sent = h.transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/empresas/atualizar-status/7/Rejeitado");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn update_status_reports_refusal() {
        let h = Harness::new(|_| json_response(200, r#"{"success":false}"#));

        assert!(!update_status(&h.api, 7, PointStatus::Aprovado).await.unwrap());
    }
}
