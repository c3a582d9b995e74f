// ============================================================================
// THEME - Tema claro/escuro persistido
// ============================================================================
// Uma única chave (`themeMode`) e uma única convenção de classes no <body>.
// O valor antigo em `colorMode` só é lido quando `themeMode` não existe.
// ============================================================================

use std::rc::Rc;

use crate::dom::ClassTarget;
use crate::utils::constants::{LEGACY_THEME_KEY, THEME_KEY};
use crate::utils::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" | "light-mode" => Some(Theme::Light),
            "dark" | "dark-mode" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Ícone do botão de alternância (mostra o tema de destino)
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[derive(Clone)]
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn get_theme(&self) -> Theme {
        if let Some(theme) = self.storage.get(THEME_KEY).as_deref().and_then(Theme::parse) {
            return theme;
        }

        match self.storage.get(LEGACY_THEME_KEY).as_deref().and_then(Theme::parse) {
            Some(theme) => {
                log::info!("🎨 [THEME] Migrando {} para {}", LEGACY_THEME_KEY, THEME_KEY);
                self.persist(theme);
                theme
            }
            None => Theme::default(),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.persist(theme);
    }

    /// Alterna, persiste e devolve o novo tema
    pub fn toggle(&self) -> Theme {
        let next = self.get_theme().toggled();
        self.set_theme(next);
        next
    }

    /// Aplica a classe do tema e remove a do tema oposto
    pub fn apply(&self, target: &dyn ClassTarget, theme: Theme) {
        target.remove_class(theme.toggled().class_name());
        target.add_class(theme.class_name());
    }

    /// Reaplica o tema salvo (carregamento da página)
    pub fn restore(&self, target: &dyn ClassTarget) -> Theme {
        let theme = self.get_theme();
        self.apply(target, theme);
        theme
    }

    fn persist(&self, theme: Theme) {
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            log::error!("❌ [THEME] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryClassList;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn defaults_to_light() {
        let store = ThemeStore::new(Rc::new(MemoryStorage::new()));
        assert_eq!(store.get_theme(), Theme::Light);
    }

    #[test]
    fn dark_survives_reload() {
        let storage = Rc::new(MemoryStorage::new());
        ThemeStore::new(storage.clone()).set_theme(Theme::Dark);

        // Nova página: novo store e novo <body> sobre o mesmo storage
        let body = MemoryClassList::with(&["light-mode"]);
        let restored = ThemeStore::new(storage.clone()).restore(&body);

        assert_eq!(restored, Theme::Dark);
        assert!(body.contains("dark-mode"));
        assert!(!body.contains("light-mode"));
        assert_eq!(storage.get("themeMode").as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_flips_and_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let store = ThemeStore::new(storage.clone());

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get("themeMode").as_deref(), Some("light"));
    }

    #[test]
    fn legacy_color_mode_is_migrated() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set("colorMode", "dark").unwrap();

        assert_eq!(ThemeStore::new(storage.clone()).get_theme(), Theme::Dark);
        assert_eq!(storage.get("themeMode").as_deref(), Some("dark"));
    }

    #[test]
    fn theme_mode_wins_over_legacy_key() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set("colorMode", "dark").unwrap();
        storage.set("themeMode", "light").unwrap();

        assert_eq!(ThemeStore::new(storage).get_theme(), Theme::Light);
    }
}
