// ============================================================================
// PONTOS VIEWMODEL - Filtro atual + lista exibida na tela de aprovação
// ============================================================================
// Sem debounce: cada tecla no filtro gera uma busca. As respostas são
// aplicadas na ordem em que chegam.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::RequestError;
use crate::models::ponto::{PointRecord, PointStatus};
use crate::services::api_client::ApiClient;
use crate::services::ponto_service;

#[derive(Clone)]
pub struct PontosViewModel {
    api: ApiClient,
    filtro: Rc<RefCell<String>>,
    records: Rc<RefCell<Vec<PointRecord>>>,
}

impl PontosViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            filtro: Rc::new(RefCell::new(String::new())),
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn filtro(&self) -> String {
        self.filtro.borrow().clone()
    }

    pub fn records(&self) -> Vec<PointRecord> {
        self.records.borrow().clone()
    }

    /// Troca o filtro e recarrega
    pub async fn search(&self, filtro: &str) -> Result<Vec<PointRecord>, RequestError> {
        *self.filtro.borrow_mut() = filtro.to_string();
        self.reload().await
    }

    /// Recarrega com o filtro atual
    pub async fn reload(&self) -> Result<Vec<PointRecord>, RequestError> {
        let filtro = self.filtro();
        let records = ponto_service::fetch_points(&self.api, &filtro).await?;
        *self.records.borrow_mut() = records.clone();
        Ok(records)
    }

    /// Aprova/rejeita e, se o backend confirmar, recarrega a lista
    pub async fn decide(&self, id: i64, status: PointStatus) -> Result<bool, RequestError> {
        let updated = ponto_service::update_status(&self.api, id, status).await?;
        if updated {
            self.reload().await?;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::Method;
    use crate::testing::{json_response, Harness};
    use serde_json::{json, Value};

    /// Backend fake com dois registros pendentes em memória
    fn backend() -> Harness {
        let server = Rc::new(RefCell::new(vec![
            json!({"id": 1, "nome_funcionario": "João", "data_hora": "2024-03-01T08:00:00", "status": "Pendente"}),
            json!({"id": 2, "nome_funcionario": "Ana", "data_hora": "2024-03-01T08:10:00", "status": "Pendente"}),
        ]));

        Harness::new(move |req| {
            let path = req.url.trim_start_matches("http://api.test");
            if req.method == Method::Put {
                let parts: Vec<&str> = path.rsplit('/').take(2).collect();
                let (status, id) = (parts[0], parts[1].parse::<i64>().unwrap());
                for row in server.borrow_mut().iter_mut() {
                    if row["id"] == id {
                        row["status"] = Value::from(status);
                    }
                }
                return json_response(200, r#"{"success":true}"#);
            }

            let rows: Vec<Value> = server
                .borrow()
                .iter()
                .filter(|row| match path.split_once("filtro=") {
                    Some((_, f)) => row["nome_funcionario"]
                        .as_str()
                        .unwrap()
                        .to_lowercase()
                        .starts_with(&f.to_lowercase()),
                    None => row["status"] == "Pendente",
                })
                .cloned()
                .collect();
            json_response(200, &Value::from(rows).to_string())
        })
    }

    #[tokio::test(flavor = "current_thread")]
    async fn approving_twice_leaves_same_list() {
        let h = backend();
        let vm = PontosViewModel::new(h.api.clone());
        vm.search("").await.unwrap();

        assert!(vm.decide(1, PointStatus::Aprovado).await.unwrap());
        let after_first = vm.records();
        assert!(vm.decide(1, PointStatus::Aprovado).await.unwrap());
        let after_second = vm.records();

        assert_eq!(after_first, after_second);
        assert_eq!(after_second.len(), 1);
        assert_eq!(after_second[0].id, 2);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn reload_after_decision_keeps_current_filter() {
        let h = backend();
        let vm = PontosViewModel::new(h.api.clone());
        vm.search("jo").await.unwrap();

        vm.decide(1, PointStatus::Rejeitado).await.unwrap();

        let urls: Vec<String> = h.transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://api.test/empresas/buscar-pontos?filtro=jo".to_string(),
                "http://api.test/empresas/atualizar-status/1/Rejeitado".to_string(),
                "http://api.test/empresas/buscar-pontos?filtro=jo".to_string(),
            ]
        );
        assert_eq!(vm.records()[0].status, PointStatus::Rejeitado);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn every_keystroke_issues_a_request() {
        let h = backend();
        let vm = PontosViewModel::new(h.api.clone());

        for filtro in ["j", "jo", "joa"] {
            vm.search(filtro).await.unwrap();
        }

        assert_eq!(h.transport.requests().len(), 3);
        assert_eq!(vm.filtro(), "joa");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn refused_update_does_not_reload() {
        let h = Harness::new(|req| {
            if req.method == Method::Put {
                json_response(200, r#"{"success":false}"#)
            } else {
                json_response(200, "[]")
            }
        });
        let vm = PontosViewModel::new(h.api.clone());

        assert!(!vm.decide(5, PointStatus::Aprovado).await.unwrap());
        assert_eq!(h.transport.requests().len(), 1);
    }
}
