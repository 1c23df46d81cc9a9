pub mod load;
pub mod types;

pub use load::load_env_file;
pub use types::{Config, DRY_RUN_VAR, FileTypeTable, MEDIA_FOLDER_VAR, Settings};
