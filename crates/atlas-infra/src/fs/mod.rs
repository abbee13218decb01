pub mod app_dirs;

pub use app_dirs::{app_config_dir, app_data_dir, default_config_path, logs_dir};
