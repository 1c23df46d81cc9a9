use anyhow::{Result, bail};
use std::path::Path;

/// 確認媒體根目錄存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("媒體資料夾不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("媒體路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());

        let file_path = temp_dir.path().join("file.mkv");
        File::create(&file_path).unwrap();
        assert!(validate_directory_exists(&file_path).is_err());
        assert!(validate_directory_exists(&temp_dir.path().join("missing")).is_err());
    }
}
