// ============================================================================
// TABLE - Modelo de linhas + renderização em <tbody>
// ============================================================================
// Cada tela mapeia seus dados para `TableRow` (função pura, testável) e
// `render_rows` transforma isso em DOM com texto puro.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, ElementBuilder};

/// Botão de ação de uma linha
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction {
    pub label: &'static str,
    pub class: &'static str,
    /// Identificador da ação entregue ao handler
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub class: Option<&'static str>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn badge(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Data {
        id: i64,
        cells: Vec<Cell>,
        actions: Vec<RowAction>,
    },
    /// Lista vazia: uma única linha ocupando todas as colunas
    Placeholder { colspan: usize, message: String },
}

impl TableRow {
    pub fn placeholder(colspan: usize, message: impl Into<String>) -> Self {
        TableRow::Placeholder {
            colspan,
            message: message.into(),
        }
    }
}

/// Substitui o conteúdo do `<tbody>`; `on_action(id, action)` recebe os cliques
pub fn render_rows<F>(tbody: &Element, rows: &[TableRow], on_action: F) -> Result<(), JsValue>
where
    F: Fn(i64, &'static str) + Clone + 'static,
{
    clear_children(tbody);

    for row in rows {
        let tr = match row {
            TableRow::Placeholder { colspan, message } => {
                let td = ElementBuilder::new("td")?
                    .class("empty-row")
                    .attr("colspan", &colspan.to_string())?
                    .text(message)
                    .build();
                ElementBuilder::new("tr")?.child(td)?.build()
            }
            TableRow::Data { id, cells, actions } => {
                let tr = ElementBuilder::new("tr")?
                    .attr("data-id", &id.to_string())?
                    .build();

                for cell in cells {
                    let td = match cell.class {
                        Some(class) => {
                            let badge = ElementBuilder::new("span")?
                                .class(&format!("badge {}", class))
                                .text(&cell.text)
                                .build();
                            ElementBuilder::new("td")?.child(badge)?.build()
                        }
                        None => ElementBuilder::new("td")?.text(&cell.text).build(),
                    };
                    append_child(&tr, &td)?;
                }

                if !actions.is_empty() {
                    let td = ElementBuilder::new("td")?.class("actions").build();
                    for action in actions {
                        let button = ElementBuilder::new("button")?
                            .attr("type", "button")?
                            .class(action.class)
                            .text(action.label)
                            .build();
                        let handler = on_action.clone();
                        let (id, name) = (*id, action.action);
                        crate::dom::on_click(&button, move |_| handler(id, name))?;
                        append_child(&td, &button)?;
                    }
                    append_child(&tr, &td)?;
                }
                tr
            }
        };
        append_child(tbody, &tr)?;
    }
    Ok(())
}
