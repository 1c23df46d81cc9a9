//! Jellyfin 集數重新命名元件
//!
//! 從格式不一的影片檔名推斷節目名稱、季數、集數與標題，
//! 並改名為 `Show - S01E01 - Title.ext` 或 `Show - E01 - Title.ext`

mod field_extractor;
mod formatter;
mod main;
mod normalizer;
mod pattern_matcher;
mod resolver;
mod show_name_resolver;
mod title_cleaner;

pub use field_extractor::{ParsedEpisode, extract_fields};
pub use formatter::{format_episode_marker, format_episode_name};
pub use main::{EpisodeRenamer, FilePlan, PlannedRename, RenameSummary, plan_file};
pub use normalizer::{clean_fragment, normalize_separators};
pub use pattern_matcher::{EpisodeMatch, PatternKind, match_episode};
pub use resolver::{RawName, ResolvedName, Unmatched, resolve, resolve_in};
pub use show_name_resolver::{ShowName, resolve_show_name, season_folder};
pub use title_cleaner::{clean_title, fallback_title};
