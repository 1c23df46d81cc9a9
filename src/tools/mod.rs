mod path_validator;
mod video_scanner;

pub use path_validator::validate_directory_exists;
pub use video_scanner::scan_video_files;
