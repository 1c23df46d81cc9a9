use crate::config::FileTypeTable;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴掃描目錄下的影片檔案，依路徑排序
pub fn scan_video_files(directory: &Path, file_type_table: &FileTypeTable) -> Result<Vec<PathBuf>> {
    let mut video_files: Vec<PathBuf> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| file_type_table.is_video_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    video_files.sort();
    debug!("在 {} 找到 {} 個影片檔案", directory.display(), video_files.len());
    Ok(video_files)
}
