//! # Actionsエンドポイント

pub mod actions;

pub use actions::handle_actions;
