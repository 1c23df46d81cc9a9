//! 集數標題清理模組

use super::normalizer::clean_fragment;

/// 清理標題片段，沒有可用文字時改用 `Episode NN`
pub fn clean_title(raw_title: &str, episode: u32) -> String {
    let title = clean_fragment(raw_title);
    if title.is_empty() {
        return fallback_title(episode);
    }
    title
}

pub fn fallback_title(episode: u32) -> String {
    format!("Episode {episode:02}")
}
