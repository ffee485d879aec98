//! The inline parser.
//!
//! Recognizes marks, links, hashtags and escape sequences within a
//! block's text. Matching is delimiter-pair based per mark type rather
//! than a single global stack, so `**bold _and_ more**` and
//! `_i **b** i_` both resolve. A two-character delimiter only opens when
//! a matching closer exists ahead; otherwise it stays literal text.

use super::escape::ESCAPABLE;
use crate::ast::{Hashtag, Inline, Link, Mark, Text};

pub(crate) fn parse_inline(text: &str) -> Vec<Inline> {
    Scanner::new(text).run()
}

pub(crate) fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    nodes: Vec<Inline>,
    buf: String,
    active: Vec<Mark>,
    italic_delim: Option<char>,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Scanner {
            chars: text.chars().collect(),
            pos: 0,
            nodes: Vec::new(),
            buf: String::new(),
            active: Vec::new(),
            italic_delim: None,
        }
    }

    fn run(mut self) -> Vec<Inline> {
        while self.pos < self.chars.len() {
            match self.chars[self.pos] {
                '\\' => self.backslash(),
                '`' => self.code_span(),
                '*' => self.emphasis('*', Mark::Bold, "**"),
                '_' => self.emphasis('_', Mark::Underlined, "__"),
                '~' => self.pair_delim(Mark::Deleted, "~~", '~'),
                '+' => self.pair_delim(Mark::Inserted, "++", '+'),
                '[' => self.bracket(),
                '#' => self.hash(),
                c => {
                    self.buf.push(c);
                    self.pos += 1;
                }
            }
        }
        self.flush();
        self.nodes
    }

    fn flush(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buf);
        let marks = self.active.clone();
        self.push_leaf(text, marks);
    }

    /// Adjacent leaves with identical mark sets are one continuous run;
    /// keep them as a single leaf.
    fn push_leaf(&mut self, text: String, marks: Vec<Mark>) {
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Text(last)) = self.nodes.last_mut() {
            if last.marks == marks {
                last.text.push_str(&text);
                return;
            }
        }
        self.nodes.push(Inline::Text(Text { text, marks }));
    }

    fn lookahead(&self, delim: &str) -> bool {
        let mut i = self.pos;
        for d in delim.chars() {
            if self.chars.get(i) != Some(&d) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Find `delim` at or after `from`, skipping escaped characters.
    fn find_delim(&self, from: usize, delim: &str) -> Option<usize> {
        let pattern: Vec<char> = delim.chars().collect();
        let mut i = from;
        while i < self.chars.len() {
            if self.chars[i] == '\\'
                && self
                    .chars
                    .get(i + 1)
                    .is_some_and(|c| ESCAPABLE.contains(c))
            {
                i += 2;
                continue;
            }
            if self.chars[i..].starts_with(&pattern[..]) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    fn literal(&mut self, s: &str) {
        self.buf.push_str(s);
        self.pos += s.chars().count();
    }

    /// `*` and `_` serve a double mark ("**"/"__") and italic.
    fn emphasis(&mut self, c: char, double_mark: Mark, double: &str) {
        if self.lookahead(double) && self.toggle_pair(double_mark, double) {
            return;
        }
        if self.toggle_italic(c) {
            return;
        }
        if self.lookahead(double) {
            self.literal(double);
        } else {
            self.literal(&c.to_string());
        }
    }

    fn pair_delim(&mut self, mark: Mark, double: &str, single: char) {
        if self.lookahead(double) {
            if !self.toggle_pair(mark, double) {
                self.literal(double);
            }
        } else {
            self.literal(&single.to_string());
        }
    }

    fn toggle_pair(&mut self, mark: Mark, delim: &str) -> bool {
        let width = delim.chars().count();
        if self.active.contains(&mark) {
            self.flush();
            self.active.retain(|m| *m != mark);
            self.pos += width;
            return true;
        }
        if self.find_delim(self.pos + width, delim).is_some() {
            self.flush();
            self.active.push(mark);
            self.pos += width;
            return true;
        }
        false
    }

    fn toggle_italic(&mut self, c: char) -> bool {
        if self.active.contains(&Mark::Italic) {
            if self.italic_delim == Some(c) {
                self.flush();
                self.active.retain(|m| *m != Mark::Italic);
                self.italic_delim = None;
                self.pos += 1;
                return true;
            }
            return false;
        }
        // only open over a non-empty span with a matching closer
        match self.find_delim(self.pos + 1, &c.to_string()) {
            Some(end) if end > self.pos + 1 => {
                self.flush();
                self.active.push(Mark::Italic);
                self.italic_delim = Some(c);
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Code spans take their contents verbatim to the next backtick; no
    /// marks, no escapes inside.
    fn code_span(&mut self) {
        let closer = self.chars[self.pos + 1..]
            .iter()
            .position(|&c| c == '`')
            .map(|off| self.pos + 1 + off);
        match closer {
            Some(end) => {
                self.flush();
                let content: String = self.chars[self.pos + 1..end].iter().collect();
                let mut marks = self.active.clone();
                marks.push(Mark::Code);
                self.push_leaf(content, marks);
                self.pos = end + 1;
            }
            None => self.literal("`"),
        }
    }

    fn bracket(&mut self) {
        if !self.try_link() {
            self.literal("[");
        }
    }

    fn try_link(&mut self) -> bool {
        let Some(close) = self.find_delim(self.pos + 1, "]") else {
            return false;
        };
        if self.chars.get(close + 1) != Some(&'(') {
            return false;
        }
        let Some(paren) = self.find_delim(close + 2, ")") else {
            return false;
        };
        let href: String = self.chars[close + 2..paren].iter().collect();
        if href.chars().any(char::is_whitespace) {
            return false;
        }
        let text: String = self.chars[self.pos + 1..close].iter().collect();
        self.flush();
        self.pos = paren + 1;
        if href.is_empty() {
            // An empty destination drops the whole node. This is the one
            // documented case where the round trip is lossy.
            return true;
        }
        let mut nodes = parse_inline(&text);
        if !self.active.is_empty() {
            // marks surrounding the link apply to the leaves inside it
            for node in &mut nodes {
                if let Inline::Text(leaf) = node {
                    let mut marks = self.active.clone();
                    marks.extend(leaf.marks.iter().copied());
                    leaf.marks = marks;
                }
            }
        }
        self.nodes.push(Inline::Link(Link { href, nodes }));
        true
    }

    fn hash(&mut self) {
        if self.chars.get(self.pos + 1).is_some_and(|&c| is_word(c)) {
            self.flush();
            let mut tag = String::from("#");
            let mut j = self.pos + 1;
            while j < self.chars.len() && is_word(self.chars[j]) {
                tag.push(self.chars[j]);
                j += 1;
            }
            self.nodes.push(Inline::Hashtag(Hashtag { text: tag }));
            self.pos = j;
        } else {
            self.literal("#");
        }
    }

    fn backslash(&mut self) {
        match self.chars.get(self.pos + 1) {
            Some(&next) if ESCAPABLE.contains(&next) => {
                self.buf.push(next);
                self.pos += 2;
            }
            _ => self.literal("\\"),
        }
    }
}
