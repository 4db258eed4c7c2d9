pub mod app;
pub mod brands;
pub mod components;
pub mod conf;
pub mod router;
pub mod switch;
