//! Escaping of markup-significant characters in literal text.
//!
//! The serializer runs every text leaf through [`escape_markup_chars`]
//! before mark and link rendering, except inside code marks and code
//! blocks. The parser's escape handling is the inverse: a backslash before
//! any character in [`ESCAPABLE`] yields the literal character.

/// Characters a backslash can neutralize in the markup.
pub(crate) const ESCAPABLE: &[char] = &[
    '#', '-', '*', '_', '`', '[', ']', '(', ')', '!', '+', '~', '.',
];

/// Per-line context needed for the positional rules: the list-marker
/// column and the dot of a leading ordered-list-shaped token.
struct LineShape {
    marker: Option<usize>,
    dot: Option<usize>,
}

impl LineShape {
    fn scan(chars: &[char], start: usize) -> Self {
        let mut j = start;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        let mut shape = LineShape {
            marker: None,
            dot: None,
        };
        match chars.get(j) {
            Some('-') | Some('+') if chars.get(j + 1) == Some(&' ') => {
                shape.marker = Some(j);
            }
            Some(c) if c.is_ascii_digit() => {
                let mut k = j;
                while k < chars.len() && !chars[k].is_whitespace() {
                    if chars[k] == '.' {
                        shape.dot = Some(k);
                        break;
                    }
                    k += 1;
                }
            }
            _ => {}
        }
        shape
    }
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn at_token_start(chars: &[char], i: usize) -> bool {
    i == 0 || chars[i - 1].is_whitespace()
}

/// End of a URL-shaped token (`scheme://` up to whitespace), if one
/// starts at `i`.
fn url_end(chars: &[char], i: usize) -> Option<usize> {
    if !chars[i].is_ascii_alphabetic() {
        return None;
    }
    let mut k = i;
    while k < chars.len()
        && (chars[k].is_ascii_alphanumeric() || matches!(chars[k], '+' | '-' | '.'))
    {
        k += 1;
    }
    if chars.get(k) != Some(&':') || chars.get(k + 1) != Some(&'/') || chars.get(k + 2) != Some(&'/')
    {
        return None;
    }
    let mut end = k + 3;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }
    Some(end)
}

/// Insert a backslash before any markup-significant character, with
/// exceptions for hashtag tokens and URL-shaped text.
pub fn escape_markup_chars(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut line = LineShape::scan(&chars, 0);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            out.push('\n');
            i += 1;
            line = LineShape::scan(&chars, i);
            continue;
        }
        if at_token_start(&chars, i) {
            if let Some(end) = url_end(&chars, i) {
                for &u in &chars[i..end] {
                    out.push(u);
                }
                i = end;
                continue;
            }
        }
        match c {
            '*' | '_' | '`' | '[' | ']' | '(' | ')' => {
                out.push('\\');
                out.push(c);
            }
            '!' if chars.get(i + 1) == Some(&'[') => {
                out.push('\\');
                out.push('!');
            }
            '#' => {
                if chars.get(i + 1).is_some_and(|&n| is_word(n)) {
                    // A hashtag token passes through; a dash directly after
                    // it is escaped so it cannot extend the tag on re-parse.
                    out.push('#');
                    let mut j = i + 1;
                    while j < chars.len() && is_word(chars[j]) {
                        out.push(chars[j]);
                        j += 1;
                    }
                    if chars.get(j) == Some(&'-') {
                        out.push('\\');
                        out.push('-');
                        j += 1;
                    }
                    i = j;
                    continue;
                }
                out.push('\\');
                out.push('#');
            }
            '-' | '+' if line.marker == Some(i) => {
                out.push('\\');
                out.push(c);
            }
            '~' | '+' if chars.get(i + 1) == Some(&c) || (i > 0 && chars[i - 1] == c) => {
                out.push('\\');
                out.push(c);
            }
            '.' if line.dot == Some(i) => {
                out.push('\\');
                out.push('.');
            }
            _ => out.push(c),
        }
        i += 1;
    }
    out
}
