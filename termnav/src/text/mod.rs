use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::error::{Error, Result};
use crate::types::HorizontalAlignment;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` so it occupies at most `max_width` cells. No ellipsis is added.
pub fn clip_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in s.char_indices() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            return &s[..idx];
        }
        width += ch_width;
    }
    s
}

/// Leading blanks needed to place text of `text_width` cells inside
/// `available_width` cells.
pub fn align_offset(text_width: usize, available_width: usize, align: HorizontalAlignment) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        HorizontalAlignment::Left => 0,
        HorizontalAlignment::Center => (available_width - text_width) / 2,
        HorizontalAlignment::Right => available_width - text_width,
    }
}

/// Format `s` into exactly `width` cells: clipped when too long, padded with
/// blanks according to `align` when too short.
pub fn fixed_width(s: &str, width: usize, align: HorizontalAlignment) -> Result<String> {
    if width == 0 {
        return Err(Error::InvalidWidth(width));
    }
    Ok(fit(s, width, align))
}

/// Infallible core of [`fixed_width`]; a zero width yields an empty string.
pub(crate) fn fit(s: &str, width: usize, align: HorizontalAlignment) -> String {
    let clipped = clip_to_width(s, width);
    let text_width = display_width(clipped);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(left + text_width);

    let mut out = String::with_capacity(width + clipped.len());
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(clipped);
    out.extend(std::iter::repeat(' ').take(right));
    out
}

/// Convert a character index to a byte index in `s`.
pub(crate) fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// One wrapped line, as a span of characters of the unwrapped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Character offset of the first character of the line.
    pub start: usize,
    /// Number of characters on the line.
    pub len: usize,
    /// The next line continues a token that was hard-split at this line's
    /// end, so no separator character sits between the two.
    pub continued: bool,
}

impl LineSpan {
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Largest caret column that still belongs to this line.
    ///
    /// The caret may rest on the separator after the last character. A
    /// hard-split line has no separator: its end offset is the next line's
    /// first column.
    pub const fn caret_limit(&self) -> usize {
        if self.continued {
            self.len.saturating_sub(1)
        } else {
            self.len
        }
    }
}

/// Greedy word wrap that keeps every line a contiguous span of `text`.
///
/// Paragraphs are split on `'\n'`, tokens on single spaces. A token is added
/// to the current line while `line + 1 + token` fits `width`; otherwise the
/// line is flushed. Tokens wider than `width` are hard-split. A run of
/// spaces that reaches past `width` never opens a line of its own: the
/// spaces stay at the end of the line before it, which may then be longer
/// than `width`. Consecutive lines of a paragraph are separated by exactly
/// one consumed space (none after a hard split), so `line.start + column` is
/// the caret's offset in the unwrapped text. Always returns at least one
/// line.
pub fn wrap_spans(text: &str, width: usize) -> Vec<LineSpan> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut base = 0;

    for paragraph in text.split('\n') {
        let mut current: Option<LineSpan> = None;
        let mut offset = base;

        for token in paragraph.split(' ') {
            let token_len = token.chars().count();
            match current.as_mut() {
                Some(line) if line.len + 1 + token_len <= width => line.len += 1 + token_len,
                // Extra spaces at a wrap point stay with the line they follow
                Some(line) if token_len == 0 => line.len += 1,
                _ => {
                    if let Some(line) = current.take() {
                        lines.push(line);
                    }
                    current = Some(open_line(&mut lines, offset, token_len, width));
                }
            }
            offset += token_len + 1;
        }

        if let Some(line) = current {
            lines.push(line);
        }
        base += paragraph.chars().count() + 1;
    }

    lines
}

/// Start a line with a token, hard-splitting it while it is too wide.
fn open_line(lines: &mut Vec<LineSpan>, mut start: usize, mut len: usize, width: usize) -> LineSpan {
    while len > width {
        lines.push(LineSpan {
            start,
            len: width,
            continued: true,
        });
        start += width;
        len -= width;
    }
    LineSpan {
        start,
        len,
        continued: false,
    }
}

/// Text of a span.
pub fn span_text(text: &str, span: &LineSpan) -> String {
    text.chars().skip(span.start).take(span.len).collect()
}

/// Word-wrap display text. Runs of whitespace inside a paragraph collapse to
/// one space; explicit newlines start new lines.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let collapsed = s
        .split('\n')
        .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n");
    let chars: Vec<char> = collapsed.chars().collect();

    wrap_spans(&collapsed, max_width)
        .iter()
        .map(|span| chars[span.start..span.end()].iter().collect())
        .collect()
}
