//! Syntax classifier for C-family source.
//!
//! The classifier is a collaborator of the renderer, not part of it: its
//! whole contract is the [`HighlightedLine`] it hands over: a sequence of
//! spans tagged with palette indices. The renderer never parses source
//! syntax itself, and the classifier never touches pixels.
//!
//! One [`Highlighter`] lives for the duration of a file. It is fed one
//! physical line per call and carries block-comment state across calls;
//! everything else resets per line.

use crate::palette::Slot;

/// A run of characters sharing one foreground/background pair.
///
/// `fg` and `bg` are raw palette indices. The renderer validates them
/// against the palette range on lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: u8,
    pub bg: u8,
}

/// One classified line: what the classifier passes into the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedLine {
    pub spans: Vec<Span>,
}

impl HighlightedLine {
    /// A line rendered entirely in default colors (highlighting disabled,
    /// or no classifier in the build).
    pub fn plain(line: &str) -> Self {
        let mut out = Self::default();
        out.push(line, Slot::Default.index());
        out
    }

    /// The line's text with all color information stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, fg: u8) {
        if text.is_empty() {
            return;
        }
        let bg = Slot::Background.index();
        match self.spans.last_mut() {
            Some(last) if last.fg == fg && last.bg == bg => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                fg,
                bg,
            }),
        }
    }
}

#[cfg(feature = "highlight")]
pub use classifier::Highlighter;

#[cfg(feature = "highlight")]
mod classifier {
    use super::HighlightedLine;
    use crate::palette::Slot;

    const KEYWORDS: &[&str] = &[
        "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
        "for", "goto", "if", "inline", "register", "restrict", "return", "sizeof", "static",
        "struct", "switch", "typedef", "union", "volatile", "while",
    ];

    const TYPES: &[&str] = &[
        "bool", "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void",
        "FILE", "size_t", "ssize_t", "intptr_t", "uintptr_t", "int8_t", "int16_t", "int32_t",
        "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t",
    ];

    const SYMBOLS: &[char] = &[
        '(', ')', '[', ']', '{', '}', '<', '>', '=', '+', '-', '*', '/', '%', '&', '|', '^', '~',
        '!', '?', ':', ';', ',', '.',
    ];

    fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// Stateful per-file classifier.
    ///
    /// Construction is engine init; dropping it is shutdown. The only state
    /// surviving between lines is whether a `/* ... */` comment is open.
    #[derive(Debug, Default)]
    pub struct Highlighter {
        in_block_comment: bool,
    }

    impl Highlighter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Classify one physical line (without its newline).
        pub fn classify_line(&mut self, line: &str) -> HighlightedLine {
            let chars: Vec<char> = line.chars().collect();
            let mut out = HighlightedLine::default();
            let mut i = 0;

            // A directive claims the '#' and the word glued to it; the rest
            // of the line is scanned normally.
            if !self.in_block_comment {
                let ws = chars.iter().take_while(|c| c.is_whitespace()).count();
                if chars.get(ws) == Some(&'#') {
                    let mut end = ws + 1;
                    while end < chars.len() && is_word_char(chars[end]) {
                        end += 1;
                    }
                    out.push(&collect(&chars[..end]), Slot::Preprocessor.index());
                    i = end;
                }
            }

            while i < chars.len() {
                if self.in_block_comment {
                    let start = i;
                    while i < chars.len() {
                        if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                            i += 2;
                            self.in_block_comment = false;
                            break;
                        }
                        i += 1;
                    }
                    out.push(&collect(&chars[start..i]), Slot::Comment.index());
                    continue;
                }

                let c = chars[i];

                // Line comment runs to the end of the line
                if c == '/' && chars.get(i + 1) == Some(&'/') {
                    out.push(&collect(&chars[i..]), Slot::Comment.index());
                    break;
                }

                // Block comment; may open and close within this line
                if c == '/' && chars.get(i + 1) == Some(&'*') {
                    self.in_block_comment = true;
                    let start = i;
                    i += 2;
                    while i < chars.len() {
                        if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                            i += 2;
                            self.in_block_comment = false;
                            break;
                        }
                        i += 1;
                    }
                    out.push(&collect(&chars[start..i]), Slot::Comment.index());
                    continue;
                }

                if c == '"' || c == '\'' {
                    let end = scan_quoted(&chars, i, c);
                    out.push(&collect(&chars[i..end]), Slot::String.index());
                    i = end;
                    continue;
                }

                if c.is_ascii_digit() {
                    let start = i;
                    while i < chars.len() && (is_word_char(chars[i]) || chars[i] == '.') {
                        i += 1;
                    }
                    out.push(&collect(&chars[start..i]), Slot::Number.index());
                    continue;
                }

                if c.is_ascii_alphabetic() || c == '_' {
                    let start = i;
                    while i < chars.len() && is_word_char(chars[i]) {
                        i += 1;
                    }
                    let word = collect(&chars[start..i]);
                    let slot = if KEYWORDS.contains(&word.as_str()) {
                        Slot::Keyword
                    } else if TYPES.contains(&word.as_str()) {
                        Slot::Type
                    } else if chars.get(i) == Some(&'(') {
                        Slot::FunctionCall
                    } else {
                        Slot::Default
                    };
                    out.push(&word, slot.index());
                    continue;
                }

                if SYMBOLS.contains(&c) {
                    out.push(&c.to_string(), Slot::Symbol.index());
                } else {
                    out.push(&c.to_string(), Slot::Default.index());
                }
                i += 1;
            }

            out
        }
    }

    fn collect(chars: &[char]) -> String {
        chars.iter().collect()
    }

    /// Find the index one past the closing quote, honoring backslash
    /// escapes. An unterminated literal runs to the end of the line.
    fn scan_quoted(chars: &[char], start: usize, quote: char) -> usize {
        let mut i = start + 1;
        while i < chars.len() {
            match chars[i] {
                '\\' => i += 2,
                c if c == quote => return i + 1,
                _ => i += 1,
            }
        }
        chars.len()
    }
}
