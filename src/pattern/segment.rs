use std::fmt;

/// One element of an encoded pattern or of a trie node's segment.
///
/// Structure markers are their own variants, so a literal byte can never be
/// mistaken for a wildcard or a catch-all. The derived ordering places every
/// literal before `Wildcard`, and `Wildcard` before `CatchAll`; sorted edge
/// lists therefore keep the dynamic edges at their tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Literal(u8),
    /// Matches one path segment: everything up to the next `/` or the end.
    Wildcard,
    /// Matches all remaining input.
    CatchAll,
}

impl Token {
    #[inline(always)]
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Token::Literal(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    /// The i-th wildcard occurrence, counting from zero.
    Fixed(usize),
    /// The catch-all occurrence; always the final capture.
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capture {
    pub name: Option<Box<str>>,
    pub kind: CaptureKind,
}

impl Capture {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Renders a token run as a route shape: variable names are gone, wildcards
/// print as `:` and catch-alls as `*`.
pub struct Shape<'a>(pub &'a [Token]);

impl fmt::Display for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut literal_run: Vec<u8> = Vec::new();
        for token in self.0 {
            match token {
                Token::Literal(b) => literal_run.push(*b),
                Token::Wildcard | Token::CatchAll => {
                    f.write_str(&String::from_utf8_lossy(&literal_run))?;
                    literal_run.clear();
                    f.write_str(if *token == Token::Wildcard { ":" } else { "*" })?;
                }
            }
        }
        f.write_str(&String::from_utf8_lossy(&literal_run))
    }
}
