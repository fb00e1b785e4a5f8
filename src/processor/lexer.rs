//! Small hand-written lexer for BASIC statement text.
//!
//! Unlike a real tokenizer this one is *lossless*: every byte of the input
//! belongs to exactly one token, so callers can rebuild the text while
//! rewriting only the parts they care about (identifiers with sigils) and
//! can find separators (`:` `;` `,`) that sit outside string literals.
//
//  Lexical items:
//
//      Ident    ::= [A-Za-z_][A-Za-z0-9_]* ('$' | '%')?
//      Number   ::= [0-9][0-9.]*
//      Text     ::= '"' .*? ('"' | EOF)   (unterminated text runs to the end)
//      Space    ::= whitespace+
//      Symbol   ::= any other single char

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Ident { name: &'a str, sigil: Option<char> },
    Number(&'a str),
    Text { body: &'a str, closed: bool },
    Space(&'a str),
    Symbol(char),
}

/// A token plus the exact source slice it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub start: usize,
    pub text: &'a str,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn consume_while<F: Fn(char) -> bool>(&mut self, pred: F) {
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Consumes up to and including the closing quote. Returns the body and
    /// whether a closing quote was found.
    fn read_text(&mut self) -> (&'a str, bool) {
        let start = self.pos;
        while let Some(c) = self.next_char() {
            if c == '"' {
                return (&self.src[start..self.pos - 1], true);
            }
        }
        (&self.src[start..], false)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let ch = self.next_char()?;

        let token = match ch {
            '"' => {
                let (body, closed) = self.read_text();
                Token::Text { body, closed }
            }
            c if c.is_whitespace() => {
                self.consume_while(char::is_whitespace);
                Token::Space(&self.src[start..self.pos])
            }
            c if c.is_ascii_digit() => {
                self.consume_while(|c| c.is_ascii_digit() || c == '.');
                Token::Number(&self.src[start..self.pos])
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');
                let name = &self.src[start..self.pos];
                let sigil = match self.peek_char() {
                    Some(s @ ('$' | '%')) => {
                        self.pos += 1;
                        Some(s)
                    }
                    _ => None,
                };
                Token::Ident { name, sigil }
            }
            c => Token::Symbol(c),
        };

        Some(Spanned {
            token,
            start,
            text: &self.src[start..self.pos],
        })
    }
}

/// Split `src` on every `sep` that is not inside a string literal.
/// Always yields at least one (possibly empty) segment.
pub fn split_unquoted(src: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut seg_start = 0;
    for tok in Lexer::new(src) {
        if tok.token == Token::Symbol(sep) {
            parts.push(&src[seg_start..tok.start]);
            seg_start = tok.start + sep.len_utf8();
        }
    }
    parts.push(&src[seg_start..]);
    parts
}

pub fn contains_unquoted(src: &str, sep: char) -> bool {
    Lexer::new(src).any(|tok| tok.token == Token::Symbol(sep))
}

#[cfg(test)]
mod tests {
    use super::{Lexer, Token, contains_unquoted, split_unquoted};

    #[test]
    fn test_tokenisation() {
        let test_cases = vec![
            (
                "A$=\"HI\"",
                vec![
                    Token::Ident {
                        name: "A",
                        sigil: Some('$'),
                    },
                    Token::Symbol('='),
                    Token::Text {
                        body: "HI",
                        closed: true,
                    },
                ],
            ),
            (
                "N% + 1.5",
                vec![
                    Token::Ident {
                        name: "N",
                        sigil: Some('%'),
                    },
                    Token::Space(" "),
                    Token::Symbol('+'),
                    Token::Space(" "),
                    Token::Number("1.5"),
                ],
            ),
            (
                "\"open",
                vec![Token::Text {
                    body: "open",
                    closed: false,
                }],
            ),
        ];

        for (src, expected) in test_cases {
            let tokens: Vec<_> = Lexer::new(src).map(|t| t.token).collect();
            assert_eq!(tokens, expected, "{src:?}");
        }
    }

    #[test]
    fn lexing_is_lossless() {
        let src = "PRINT \"a: b\";X$ , 3*Y%  ' é";
        let rebuilt: String = Lexer::new(src).map(|t| t.text).collect();
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn splits_outside_quotes_only() {
        assert_eq!(
            split_unquoted("PRINT \"A:B\": CLS", ':'),
            vec!["PRINT \"A:B\"", " CLS"]
        );
        assert_eq!(split_unquoted("A$;\" \";B%", ';'), vec!["A$", "\" \"", "B%"]);
        assert_eq!(split_unquoted("CLS", ':'), vec!["CLS"]);
        assert_eq!(split_unquoted("", ':'), vec![""]);

        assert!(contains_unquoted("\"X\";Y", ';'));
        assert!(!contains_unquoted("\"X;Y\"", ';'));
    }
}
