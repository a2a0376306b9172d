use hashbrown::HashSet;
use smallvec::SmallVec;

use super::lexer::{SegmentKind, parse_segment};
use super::segment::{Capture, CaptureKind, Shape, Token};
use super::{PatternError, PatternResult};

/// A route pattern lowered to trie tokens plus the names of its variables.
///
/// Immutable once built; the router shares it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: Box<str>,
    tokens: Box<[Token]>,
    captures: Box<[Capture]>,
}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    pub fn has_catch_all(&self) -> bool {
        self.tokens.last() == Some(&Token::CatchAll)
    }

    pub fn is_static(&self) -> bool {
        self.captures.is_empty()
    }

    /// The route shape used for duplicate detection, e.g. `/user/:/op`.
    pub fn shape(&self) -> String {
        Shape(&self.tokens).to_string()
    }
}

#[tracing::instrument(level = "trace", skip(pattern), fields(pattern=%pattern))]
pub fn compile(pattern: &str) -> PatternResult<CompiledPattern> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let Some(body) = pattern.strip_prefix('/') else {
        return Err(PatternError::MissingLeadingSlash {
            pattern: pattern.to_string(),
        });
    };

    let segments: SmallVec<[&str; 8]> = body.split('/').collect();
    let total_segments = segments.len();

    let mut tokens: Vec<Token> = Vec::with_capacity(pattern.len());
    let mut captures: Vec<Capture> = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut wildcard_index = 0usize;

    for (segment_index, seg) in segments.iter().enumerate() {
        tokens.push(Token::Literal(b'/'));

        let (token, kind, name) = match parse_segment(seg)? {
            SegmentKind::Literal(lit) => {
                tokens.extend(lit.bytes().map(Token::Literal));
                continue;
            }
            SegmentKind::Wildcard(name) => {
                let kind = CaptureKind::Fixed(wildcard_index);
                wildcard_index += 1;
                (Token::Wildcard, kind, name)
            }
            SegmentKind::CatchAll(name) => {
                if segment_index + 1 != total_segments {
                    return Err(PatternError::CatchAllNotTerminal {
                        pattern: pattern.to_string(),
                        segment_index,
                        total_segments,
                    });
                }
                (Token::CatchAll, CaptureKind::Rest, name)
            }
        };

        if let Some(name) = name
            && !seen_names.insert(name)
        {
            return Err(PatternError::DuplicateParamName {
                param: name.to_string(),
                pattern: pattern.to_string(),
            });
        }

        tokens.push(token);
        captures.push(Capture {
            name: name.map(Box::from),
            kind,
        });
    }

    Ok(CompiledPattern {
        source: Box::from(pattern),
        tokens: tokens.into_boxed_slice(),
        captures: captures.into_boxed_slice(),
    })
}
