//! Line/column recovery from byte offsets.

use crate::types::Position;

/// Counts the 1-indexed column of the character following `line_prefix`.
///
/// Columns are measured in UTF-16 code units, the unit editors and the
/// TypeScript toolchain report.
#[must_use]
pub fn utf16_column(line_prefix: &str) -> usize {
    line_prefix.encode_utf16().count() + 1
}

/// Converts a byte offset into a 1-indexed [`Position`].
///
/// Offsets past the end of `content` are clamped to the end. Offsets inside a
/// multi-byte character are moved back to its start.
#[must_use]
pub fn position_at(content: &str, offset: usize) -> Position {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);

    Position::new(line, utf16_column(&before[line_start..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_file() {
        assert_eq!(position_at("abc", 0), Position::new(1, 1));
    }

    #[test]
    fn test_later_lines() {
        let content = "line1\nline2\nline3";
        assert_eq!(position_at(content, 6), Position::new(2, 1));
        assert_eq!(position_at(content, 8), Position::new(2, 3));
        assert_eq!(position_at(content, 12), Position::new(3, 1));
    }

    #[test]
    fn test_utf16_columns() {
        // "é" is two bytes but one UTF-16 unit; "😀" is four bytes and two units.
        let content = "é😀x";
        assert_eq!(position_at(content, "é😀".len()), Position::new(1, 4));
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(position_at("ab\nc", 100), Position::new(2, 2));
    }
}
