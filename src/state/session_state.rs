// ============================================================================
// SESSION STORE - Único dono das transições criar/limpar da sessão
// ============================================================================

use std::rc::Rc;

use crate::error::SessionError;
use crate::models::session::{Nivel, Session};
use crate::utils::constants::{COMPANY_ID_KEY, NIVEL_KEY, SESSION_KEYS, TOKEN_KEY, USER_ID_KEY};
use crate::utils::storage::KeyValueStore;

/// Sessão persistida nas chaves `token`, `nivel`, `id_usuario`, `id_empresa`
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Grava a sessão após o login. Remove antes qualquer resto de sessão anterior
    /// para que `id_empresa` não sobreviva a um login de suporte.
    pub fn create(&self, session: &Session) -> Result<(), SessionError> {
        self.clear();

        if let Some(token) = session.token() {
            self.storage.set(TOKEN_KEY, token)?;
        }
        self.storage.set(NIVEL_KEY, session.nivel().as_str())?;
        self.storage.set(USER_ID_KEY, &session.user_id().to_string())?;
        if let Some(company_id) = session.company_id() {
            self.storage.set(COMPANY_ID_KEY, &company_id.to_string())?;
        }

        log::info!("💾 [SESSION] Sessão criada: usuário {} ({})", session.user_id(), session.nivel());
        Ok(())
    }

    /// Sessão atual, se as chaves persistidas formarem uma sessão válida
    pub fn load(&self) -> Option<Session> {
        let nivel = match self.storage.get(NIVEL_KEY)?.parse::<Nivel>() {
            Ok(nivel) => nivel,
            Err(e) => {
                log::warn!("⚠️ [SESSION] {}", e);
                return None;
            }
        };
        let user_id = self.storage.get(USER_ID_KEY)?.trim().parse::<i64>().ok()?;
        let company_id = self
            .storage
            .get(COMPANY_ID_KEY)
            .and_then(|v| v.trim().parse::<i64>().ok());
        let token = self.storage.get(TOKEN_KEY);

        match Session::new(token, nivel, user_id, company_id) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("⚠️ [SESSION] Sessão persistida inconsistente: {}", e);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn nivel(&self) -> Option<Nivel> {
        self.storage.get(NIVEL_KEY)?.parse().ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }

    /// Apaga todas as chaves da sessão. Falhas individuais só são logadas.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove(key) {
                log::error!("❌ [SESSION] {}", e);
            }
        }
        log::info!("🗑️ [SESSION] Sessão limpa");
    }
}
