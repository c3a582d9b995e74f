// ============================================================================
// STATE MODULE - Estado compartilhado com Rc<RefCell>
// ============================================================================

pub mod session_state;
pub mod app_state;

pub use session_state::*;
pub use app_state::*;
