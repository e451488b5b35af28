pub mod dialog;
pub mod images;
pub mod panels;
pub mod theme;
