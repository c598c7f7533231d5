pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod gate;
pub mod model;
pub mod session;
pub mod signal;
pub mod theme;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
