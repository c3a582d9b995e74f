pub mod table;
pub mod layout;
pub mod login_view;
pub mod empresa_view;
pub mod pontos_view;
pub mod funcionario_view;

pub use layout::{hide_loader, init_layout};
pub use login_view::init_login_view;
pub use empresa_view::init_empresa_view;
pub use pontos_view::init_pontos_view;
pub use funcionario_view::init_funcionario_view;
