//! Jellyfin 檔名格式化模組
//!
//! * 多季：`Show - S01E01 - Title.ext`
//! * 單季：`Show - E01 - Title.ext`

/// 組出集數標記（`S01E01`、`E01`、`S01E01-E02`）
pub fn format_episode_marker(
    season: Option<u32>,
    episode: u32,
    episode_end: Option<u32>,
) -> String {
    let mut marker = match season {
        Some(season) => format!("S{season:02}E{episode:02}"),
        None => format!("E{episode:02}"),
    };
    if let Some(end) = episode_end {
        marker.push_str(&format!("-E{end:02}"));
    }
    marker
}

/// 產生新檔名
///
/// # Arguments
/// * `extension` - 副檔名，可含或不含前導點；空字串時不加點
pub fn format_episode_name(
    show_name: &str,
    season: Option<u32>,
    episode: u32,
    episode_end: Option<u32>,
    title: &str,
    extension: &str,
) -> String {
    let marker = format_episode_marker(season, episode, episode_end);
    let extension = extension.trim_start_matches('.');

    if extension.is_empty() {
        format!("{show_name} - {marker} - {title}")
    } else {
        format!("{show_name} - {marker} - {title}.{extension}")
    }
}
