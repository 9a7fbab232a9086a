pub mod catalog;
pub mod config;
pub mod contact;
pub mod finder;
pub mod navigation;
pub mod output;
pub mod render;
pub mod server;
pub mod session;
pub mod viewer;
