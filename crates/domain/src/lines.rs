//! Non-empty line counting.
//!
//! A line is non-empty when anything other than whitespace remains after
//! trimming both ends. Whitespace is Unicode `White_Space` plus the ASCII
//! separators U+001C..=U+001F. Lines end at `\n`, `\r\n` or a lone `\r`.

use std::io::{self, BufRead};

use crate::value_objects::LineCount;

#[inline]
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[inline]
pub fn is_non_empty(line: &str) -> bool {
    !line.trim_matches(is_blank_char).is_empty()
}

/// Counts non-empty lines in an in-memory string.
pub fn count_non_empty(text: &str) -> LineCount {
    text.split(['\n', '\r']).filter(|line| is_non_empty(line)).count().into()
}

/// Counts non-empty lines read lazily from `reader`.
///
/// The reader is consumed one line at a time; only the current line is held
/// in memory. Content that is not valid UTF-8 yields an
/// [`io::ErrorKind::InvalidData`] error.
pub fn count_non_empty_lines<R: BufRead>(mut reader: R) -> io::Result<LineCount> {
    let mut count = LineCount::zero();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        // `read_line` only splits on `\n`; old Mac files separate with a bare `\r`.
        for segment in line.split('\r') {
            if is_non_empty(segment) {
                count.increment();
            }
        }
    }
    Ok(count)
}
