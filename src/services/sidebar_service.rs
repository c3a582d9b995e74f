use std::rc::Rc;

use crate::dom::ClassTarget;
use crate::utils::constants::SIDEBAR_KEY;
use crate::utils::storage::{load_bool, KeyValueStore};

pub const COLLAPSED_CLASS: &str = "collapsed";

/// Sidebar aberta/recolhida, persistida em `sidebarCollapsed`
#[derive(Clone)]
pub struct SidebarStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SidebarStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn is_collapsed(&self) -> bool {
        load_bool(&*self.storage, SIDEBAR_KEY, false)
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        let value = if collapsed { "true" } else { "false" };
        if let Err(e) = self.storage.set(SIDEBAR_KEY, value) {
            log::error!("❌ [SIDEBAR] {}", e);
        }
    }

    pub fn toggle(&self) -> bool {
        let collapsed = !self.is_collapsed();
        self.set_collapsed(collapsed);
        collapsed
    }

    pub fn apply(&self, target: &dyn ClassTarget, collapsed: bool) {
        if collapsed {
            target.add_class(COLLAPSED_CLASS);
        } else {
            target.remove_class(COLLAPSED_CLASS);
        }
    }

    pub fn restore(&self, target: &dyn ClassTarget) -> bool {
        let collapsed = self.is_collapsed();
        self.apply(target, collapsed);
        collapsed
    }
}
