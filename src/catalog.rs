pub mod command;
pub mod domain;
pub mod factory;
pub mod render;
pub mod state;
pub mod validation;
pub mod view;
