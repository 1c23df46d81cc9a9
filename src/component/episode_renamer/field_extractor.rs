//! 欄位擷取模組
//!
//! 依辨識結果切出季數、集數、節目名稱前綴與原始標題片段

use super::pattern_matcher::{EpisodeMatch, PatternKind};

/// 擷取後的集數資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEpisode {
    pub season: Option<u32>,
    pub episode: u32,
    pub episode_end: Option<u32>,
    /// 集數標記之前的文字（未清理）
    pub show_prefix: String,
    /// 集數標記之後的文字，已去除開頭的分隔字元
    pub raw_title: String,
    pub kind: PatternKind,
}

/// 由正規化檔名與辨識結果擷取欄位
pub fn extract_fields(normalized: &str, matched: &EpisodeMatch) -> ParsedEpisode {
    let show_prefix = normalized[..matched.prefix_end].to_string();
    let raw_title = normalized[matched.span.end..]
        .trim_start_matches([' ', '-'])
        .to_string();

    ParsedEpisode {
        season: matched.season,
        episode: matched.episode,
        episode_end: matched.episode_end,
        show_prefix,
        raw_title,
        kind: matched.kind,
    }
}
