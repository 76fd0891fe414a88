pub mod app;
pub mod cursor;
pub mod theme;
pub mod window;
