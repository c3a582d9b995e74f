// ============================================================================
// PONTO WEB - FRONT END DO SISTEMA DE PONTO (RUST + WASM)
// ============================================================================
// Cada página HTML declara sua tela em <body data-page="...">:
// - Views: ligam o DOM de cada tela (sem regra de negócio)
// - ViewModels: estado de tela + lógica de UI
// - Services: comunicação com a API e estado cosmético persistido
// - State: sessão e dependências compartilhadas (Rc)
// - Models: estruturas trocadas com o backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::AppState;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Ponto Web ({})", CONFIG.environment);

    let app = App::new(AppState::browser());
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Logout chamável de scripts da página (`onclick="wasm.logout()"`)
#[wasm_bindgen]
pub fn logout() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => services::auth_service::logout(app.state()),
        None => log::warn!("⚠️ [APP] App não inicializada"),
    });
}
