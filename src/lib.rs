pub mod commands;
pub mod consent_cache;
pub mod console;
pub mod consts;
pub mod exceptions;
pub mod flow;
pub mod fs;
pub mod history;
pub mod models;
pub mod profile;
pub mod settings;
pub mod uploader;
pub mod utils;
