pub mod axis;
pub mod color;
pub mod label;
pub mod layout;
