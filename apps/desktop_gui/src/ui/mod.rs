//! egui rendering of a command window.

pub mod app;

pub use app::CommandWindowApp;
