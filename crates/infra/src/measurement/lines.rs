/// 行境界として扱う文字 (`\r\n` は 1 つの境界)
#[inline]
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text on universal newlines.
///
/// A terminator closes the current line rather than opening a new one, so
/// `"a\n"` yields one line and `""` yields none. Terminators are not part of
/// the yielded slices.
#[derive(Debug, Clone)]
pub struct UniversalLines<'a> {
    rest: &'a str,
}

impl<'a> UniversalLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for UniversalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((idx, boundary)) = self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..idx];
        let mut next = idx + boundary.len_utf8();
        if boundary == '\r' && self.rest[next..].starts_with('\n') {
            next += 1;
        }
        self.rest = &self.rest[next..];
        Some(line)
    }
}

/// Whitespace-delimited, non-empty tokens in `line`.
///
/// `\x1f` counts as a separator in addition to Unicode whitespace.
pub fn count_words(line: &str) -> usize {
    line.split(|c: char| c.is_whitespace() || c == '\x1f')
        .filter(|token| !token.is_empty())
        .count()
}
