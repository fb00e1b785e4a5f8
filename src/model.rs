use std::fmt;

/// One non-empty physical line of the BASIC source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based position in the input file.
    pub ordinal: usize,
    /// Trimmed text exactly as read.
    pub raw: String,
    pub label: Option<String>,
    pub body: String,
}

/// Value kind carried by a BASIC variable's sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// `A$`
    String,
    /// `A%`
    Integer,
    /// `A`
    Real,
}

impl VarKind {
    pub fn of(token: &str) -> Self {
        if token.contains('$') {
            VarKind::String
        } else if token.contains('%') {
            VarKind::Integer
        } else {
            VarKind::Real
        }
    }

    pub fn from_sigil(sigil: Option<char>) -> Self {
        match sigil {
            Some('$') => VarKind::String,
            Some('%') => VarKind::Integer,
            _ => VarKind::Real,
        }
    }

    /// Suffix that replaces the sigil in the Python identifier.
    pub fn suffix(self) -> &'static str {
        match self {
            VarKind::String => "S",
            VarKind::Integer => "N",
            VarKind::Real => "",
        }
    }
}

/// A variable reference, e.g. `NAME$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
}

impl Variable {
    /// Parses a single `IDENT[$|%]` token. Surrounding whitespace is allowed,
    /// anything else is not.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (name, sigil) = match token.chars().last()? {
            c @ ('$' | '%') => (&token[..token.len() - 1], Some(c)),
            _ => (token, None),
        };

        let mut chars = name.chars();
        let first = chars.next()?;
        if !(first.is_ascii_alphabetic() || first == '_') {
            return None;
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            kind: VarKind::from_sigil(sigil),
        })
    }

    /// Python identifier for this variable (`NAME$` → `NAMES`).
    pub fn ident(&self) -> String {
        format!("{}{}", self.name, self.kind.suffix())
    }
}

/// Translated form of one statement: the comment that reproduces the
/// source, and the Python lines generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub comment: String,
    pub code: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No recognised keyword and no assignment.
    UnknownStatement,
    /// `INPUT` without a variable that could be isolated.
    NoInputVariable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownStatement => write!(f, "unsupported statement"),
            SkipReason::NoInputVariable => write!(f, "INPUT without a recognisable variable"),
        }
    }
}

/// A statement that produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub ordinal: usize,
    pub label: Option<String>,
    pub statement: String,
    pub reason: SkipReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(
                f,
                "line {} (label {}): {}: `{}`",
                self.ordinal, label, self.reason, self.statement
            ),
            None => write!(
                f,
                "line {}: {}: `{}`",
                self.ordinal, self.reason, self.statement
            ),
        }
    }
}

/// Everything one pass over the source produced, handed to `writer`.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub records: Vec<Record>,
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_sigil() {
        let test_cases = vec![
            ("A$", VarKind::String),
            ("A%", VarKind::Integer),
            ("A", VarKind::Real),
        ];

        for (token, expected) in test_cases {
            assert_eq!(VarKind::of(token), expected);
            assert_eq!(Variable::parse(token).unwrap().kind, expected);
        }
    }

    #[test]
    fn parse_variable_tokens() {
        let v = Variable::parse(" NAME$ ").unwrap();
        assert_eq!(v.name, "NAME");
        assert_eq!(v.ident(), "NAMES");

        assert_eq!(Variable::parse("CNT%").unwrap().ident(), "CNTN");
        assert_eq!(Variable::parse("X1").unwrap().ident(), "X1");

        for bad in ["", "$", "1A", "A B", "A$$", "A,B", "\"A\""] {
            assert_eq!(Variable::parse(bad), None, "{bad:?} should not parse");
        }
    }
}
