pub mod ci;
pub mod diag;
pub mod error;
pub mod json;
pub mod menu;
pub mod table;
pub mod terminal;
pub mod theme;
