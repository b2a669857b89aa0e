//! Pure markdown escaping utilities.
//!
//! These functions handle escaping special Markdown characters and sizing
//! the backtick run for inline code.

use std::borrow::Cow;

/// Escape special Markdown characters in text.
///
/// Escapes characters that have special meaning in Markdown:
/// - Backslash: `\\`
/// - Emphasis: `*`, `_`
/// - Links: `[`, `]`
/// - Code: `` ` ``
/// - Headings: `#` (only at line start)
/// - Tables: `|`
/// - HTML: `<`, `>`
/// - Images: `!` (when followed by `[`)
///
/// Markers that only matter where a block begins are handled by
/// [`escape_block_start`].
///
/// # Examples
///
/// ```
/// use richblocks::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
/// assert_eq!(escape_markdown("[link]"), "\\[link\\]");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    let mut line_start = true;

    for (i, c) in text.char_indices() {
        let next = text[i + c.len_utf8()..].chars().next();
        if needs_escape(c, line_start, next) {
            result.push('\\');
        }
        result.push(c);
        line_start = c == '\n';
    }

    result
}

fn needs_escape(c: char, line_start: bool, next: Option<char>) -> bool {
    match c {
        '\\' | '*' | '_' | '[' | ']' | '`' | '|' | '<' | '>' => true,
        '#' => line_start,
        '!' => next == Some('['),
        _ => false,
    }
}

/// Escape a marker at the start of already-escaped text that would
/// otherwise open a list item, a thematic break or a code fence.
///
/// Ordered markers (`1.`, `2)`) and bullets (`-`, `+`) count only when
/// followed by whitespace or the end of the text. `-`, `+`, `=` and `~`
/// also count when doubled, which covers `---`, `===` and `~~~`.
///
/// # Examples
///
/// ```
/// use richblocks::markdown::escape_block_start;
///
/// assert_eq!(escape_block_start("1. Not a list"), "1\\. Not a list");
/// assert_eq!(escape_block_start("- Not a bullet"), "\\- Not a bullet");
/// assert_eq!(escape_block_start("-5 degrees"), "-5 degrees");
/// ```
pub fn escape_block_start(text: &str) -> Cow<'_, str> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        // CommonMark caps ordered markers at nine digits
        let rest = &text[digits..];
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some('.' | ')'), next) if digits <= 9 && ends_marker(next) => {
                Cow::Owned(format!("{}\\{}", &text[..digits], rest))
            }
            _ => Cow::Borrowed(text),
        };
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ ('-' | '+')), next) if ends_marker(next) || next == Some(c) => {
            Cow::Owned(format!("\\{text}"))
        }
        (Some(c @ ('=' | '~')), Some(next)) if next == c => Cow::Owned(format!("\\{text}")),
        _ => Cow::Borrowed(text),
    }
}

fn ends_marker(next: Option<char>) -> bool {
    next.is_none_or(char::is_whitespace)
}

/// Calculate the minimum backtick count needed for inline code.
///
/// Returns the smallest number of backticks (at least 1) that doesn't
/// appear as a run in the content.
///
/// # Examples
///
/// ```
/// use richblocks::markdown::calculate_inline_code_ticks;
///
/// assert_eq!(calculate_inline_code_ticks("code"), 1);
/// assert_eq!(calculate_inline_code_ticks("code with ` backtick"), 2);
/// ```
pub fn calculate_inline_code_ticks(content: &str) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;

    for c in content.chars() {
        if c == '`' {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }

    max_run + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape_markdown("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_emphasis() {
        assert_eq!(escape_markdown("*bold*"), "\\*bold\\*");
        assert_eq!(escape_markdown("_italic_"), "\\_italic\\_");
    }

    #[test]
    fn test_escape_heading_at_line_start() {
        assert_eq!(escape_markdown("# heading"), "\\# heading");
        assert_eq!(escape_markdown("not # heading"), "not # heading");
        assert_eq!(escape_markdown("line\n# heading"), "line\n\\# heading");
    }

    #[test]
    fn test_escape_html_and_pipes() {
        assert_eq!(escape_markdown("<tag> | x"), "\\<tag\\> \\| x");
    }

    #[test]
    fn test_escape_image_start() {
        assert_eq!(escape_markdown("![alt]"), "\\!\\[alt\\]");
        assert_eq!(escape_markdown("Wow!"), "Wow!");
    }

    #[test]
    fn test_block_start_ordered_marker() {
        assert_eq!(escape_block_start("1. Not a list"), "1\\. Not a list");
        assert_eq!(escape_block_start("12) Twelve"), "12\\) Twelve");
        assert_eq!(escape_block_start("2."), "2\\.");
        assert_eq!(escape_block_start("1.5 million"), "1.5 million");
        assert_eq!(escape_block_start("2024 was good"), "2024 was good");
        assert_eq!(escape_block_start("1234567890. Too long"), "1234567890. Too long");
    }

    #[test]
    fn test_block_start_bullets_and_rules() {
        assert_eq!(escape_block_start("- Not a bullet"), "\\- Not a bullet");
        assert_eq!(escape_block_start("+ Plus"), "\\+ Plus");
        assert_eq!(escape_block_start("---"), "\\---");
        assert_eq!(escape_block_start("==="), "\\===");
        assert_eq!(escape_block_start("~~~ fence"), "\\~~~ fence");
        assert_eq!(escape_block_start("-5 degrees"), "-5 degrees");
        assert_eq!(escape_block_start("= sign"), "= sign");
        assert_eq!(escape_block_start("plain"), "plain");
    }

    #[test]
    fn test_inline_code_ticks() {
        assert_eq!(calculate_inline_code_ticks("code"), 1);
        assert_eq!(calculate_inline_code_ticks("`"), 2);
        assert_eq!(calculate_inline_code_ticks("a `` b ` c"), 3);
    }
}
