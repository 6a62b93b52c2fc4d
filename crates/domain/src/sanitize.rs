use unicode_normalization::UnicodeNormalization;

use crate::value_objects::FileName;

/// クライアントが送ったファイル名を保存用の安全な名前に変換する。
///
/// Directory components are dropped, the rest is folded to ASCII, whitespace
/// runs become `_`, and anything outside `[A-Za-z0-9_.-]` is removed. Leading
/// and trailing dots or underscores are trimmed, so the result can be empty.
pub fn secure_filename(raw: &str) -> FileName {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let ascii: String = base.nfkd().filter(char::is_ascii).collect();
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    FileName::new(kept.trim_matches(['.', '_']))
}
