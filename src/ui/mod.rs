pub mod cards;
pub mod format;
pub mod panels;
