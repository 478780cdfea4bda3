//! Configuration management

mod settings;

pub use settings::{config_path, load, load_from_path, save, save_to_path};
