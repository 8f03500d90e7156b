pub mod console;
pub mod factory;
pub mod menu;
pub mod reporter;
