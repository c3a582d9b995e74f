pub mod pontos_viewmodel;

pub use pontos_viewmodel::PontosViewModel;
