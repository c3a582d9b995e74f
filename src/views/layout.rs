// ============================================================================
// LAYOUT - Tema, sidebar, loader e logout (comum a todas as páginas)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{body, get_element_by_id, on_click, set_text_content, ClassTarget};
use crate::services::auth_service;
use crate::services::theme_service::Theme;
use crate::state::app_state::AppState;

const THEME_TOGGLE_ID: &str = "theme-toggle";
const SIDEBAR_ID: &str = "sidebar";
const SIDEBAR_TOGGLE_ID: &str = "sidebar-toggle";
const LOADER_ID: &str = "page-loader";
const LOGOUT_ID: &str = "logout-btn";
/// Duração da transição CSS do loader
const LOADER_FADE_MS: u32 = 300;

pub fn init_layout(state: &AppState) -> Result<(), JsValue> {
    init_theme(state)?;
    init_sidebar(state)?;
    init_logout(state)?;
    Ok(())
}

fn init_theme(state: &AppState) -> Result<(), JsValue> {
    let Some(body) = body() else {
        return Ok(());
    };
    let body: Element = body.into();
    let theme = state.theme();
    let current = theme.restore(&body);

    if let Some(toggle) = get_element_by_id(THEME_TOGGLE_ID) {
        update_toggle_icon(&toggle, current);
        let toggle_for_click = toggle.clone();
        on_click(&toggle, move |_| {
            let next = theme.toggle();
            theme.apply(&body, next);
            update_toggle_icon(&toggle_for_click, next);
            log::info!("🎨 [THEME] Tema {}", next.as_str());
        })?;
    }
    Ok(())
}

fn update_toggle_icon(toggle: &Element, theme: Theme) {
    set_text_content(toggle, theme.toggle_icon());
    if let Err(e) = toggle.set_attribute("aria-pressed", if theme == Theme::Dark { "true" } else { "false" }) {
        log::warn!("⚠️ [THEME] {:?}", e);
    }
}

fn init_sidebar(state: &AppState) -> Result<(), JsValue> {
    let Some(sidebar) = get_element_by_id(SIDEBAR_ID) else {
        return Ok(());
    };
    let store = state.sidebar();
    store.restore(&sidebar);

    if let Some(toggle) = get_element_by_id(SIDEBAR_TOGGLE_ID) {
        on_click(&toggle, move |_| {
            let collapsed = store.toggle();
            store.apply(&sidebar, collapsed);
        })?;
    }
    Ok(())
}

fn init_logout(state: &AppState) -> Result<(), JsValue> {
    if let Some(button) = get_element_by_id(LOGOUT_ID) {
        let state = state.clone();
        on_click(&button, move |e| {
            e.prevent_default();
            auth_service::logout(&state);
        })?;
    }
    Ok(())
}

/// Esconde o loader depois que a página foi ligada
pub fn hide_loader() {
    if let Some(loader) = get_element_by_id(LOADER_ID) {
        loader.add_class("fade-out");
        Timeout::new(LOADER_FADE_MS, move || {
            loader.add_class("hidden");
        })
        .forget();
    }
}
