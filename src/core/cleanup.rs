use crate::utils::error::{FetchError, Result};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 將 `*` / `?` 萬用字元轉成完整比對的正規表達式
pub fn wildcard_to_regex(glob: &str) -> Result<Regex> {
    let mut pattern = String::with_capacity(glob.len() + 8);
    pattern.push('^');
    for ch in glob.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            other => pattern.push_str(&regex::escape(other.encode_utf8(&mut [0u8; 4]))),
        }
    }
    pattern.push('$');

    Regex::new(&pattern).map_err(|e| FetchError::InvalidConfigValueError {
        field: "retrieval.pattern".to_string(),
        value: glob.to_string(),
        reason: format!("Cannot build file matcher: {}", e),
    })
}

/// 刪除 `dir` 底下（不遞迴）檔名符合 `glob` 的一般檔案，回傳刪除數量。
///
/// 目錄永遠不會被刪除；`dir` 不存在時視為沒有東西要清；單一檔案刪除失敗只記錄警告。
pub fn clean_local_matches(dir: &Path, glob: &str) -> Result<usize> {
    let matcher = wildcard_to_regex(glob)?;

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Clean skipped, {} does not exist", dir.display());
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !matcher.is_match(name) {
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(()) => {
                tracing::debug!("🧹 Removed {}", entry.path().display());
                removed += 1;
            }
            Err(e) => {
                tracing::warn!("Could not remove {}: {}", entry.path().display(), e);
            }
        }
    }

    Ok(removed)
}
