pub mod app;
pub mod args;
pub mod autocomplete;
pub mod ui;
