#[cfg(test)]
use std::cell::RefCell;

/// Navegação entre páginas
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// `window.location.href = path`
#[derive(Clone, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        log::info!("➡️ [NAV] Redirecionando para {}", path);
        let result = web_sys::window()
            .ok_or_else(|| "No window".to_string())
            .and_then(|w| {
                w.location()
                    .set_href(path)
                    .map_err(|e| format!("{:?}", e))
            });
        if let Err(e) = result {
            log::error!("❌ [NAV] Falha ao redirecionar para {}: {}", path, e);
        }
    }
}

/// Guarda os destinos em vez de navegar (testes)
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
