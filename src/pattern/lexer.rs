use super::{PatternError, PatternResult};

/// Classification of one `/`-delimited pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    Literal(&'a str),
    Wildcard(Option<&'a str>),
    CatchAll(Option<&'a str>),
}

#[tracing::instrument(level = "trace", skip(seg), fields(segment=%seg))]
pub fn parse_segment(seg: &str) -> PatternResult<SegmentKind<'_>> {
    let bytes = seg.as_bytes();

    match bytes.first().copied() {
        Some(b':') => Ok(SegmentKind::Wildcard(parse_name(seg, &seg[1..])?)),
        Some(b'*') => Ok(SegmentKind::CatchAll(parse_name(seg, &seg[1..])?)),
        _ => {
            if let Some(&byte) = bytes.iter().find(|&&b| b <= 0x20 || b == 0x7f) {
                return Err(PatternError::ControlCharacter {
                    segment: seg.to_string(),
                    byte,
                });
            }
            Ok(SegmentKind::Literal(seg))
        }
    }
}

fn parse_name<'a>(seg: &str, name: &'a str) -> PatternResult<Option<&'a str>> {
    let nb = name.as_bytes();

    let Some(&first) = nb.first() else {
        return Ok(None);
    };

    if !(first.is_ascii_alphabetic() || first == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: seg.to_string(),
            name: name.to_string(),
            found: name.chars().next().unwrap_or(first as char),
        });
    }

    if let Some(invalid) = name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(PatternError::ParameterInvalidCharacter {
            segment: seg.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(Some(name))
}
