// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// Listeners em elementos da página vivem enquanto a página existir, então
// `closure.forget()` é seguro: cada página é carregada do zero pelo navegador.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

/// Listener genérico
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Dispara a cada tecla (evento `input`)
pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "input", handler)
}

/// Intercepta o submit do formulário (`preventDefault` antes do handler)
pub fn on_submit<F>(target: &EventTarget, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_event(target, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}
