// ============================================================================
// ELEMENT HELPERS - Funções básicas para manipular o DOM
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::BTreeSet;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obter window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obter document
pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Obter elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Criar elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Define o class name (substitui todas as classes)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Texto puro; nunca interpreta HTML
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Remove todos os filhos
pub fn clear_children(element: &Element) {
    element.set_text_content(None);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Alvo de classes CSS: um elemento real ou uma lista em memória nos testes
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

impl ClassTarget for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("⚠️ [DOM] Erro adicionando classe {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("⚠️ [DOM] Erro removendo classe {}: {:?}", class, e);
        }
    }
}

/// Lista de classes sem DOM
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClassList {
    classes: RefCell<BTreeSet<String>>,
}

#[cfg(test)]
impl MemoryClassList {
    pub fn with(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

#[cfg(test)]
impl ClassTarget for MemoryClassList {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}
