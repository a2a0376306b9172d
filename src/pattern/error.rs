use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern '{pattern}' must begin with '/'")]
    MissingLeadingSlash { pattern: String },
    #[error(
        "catch-all segment must be terminal in '{pattern}': index {segment_index} of {total_segments}"
    )]
    CatchAllNotTerminal {
        pattern: String,
        segment_index: usize,
        total_segments: usize,
    },
    #[error("literal segment '{segment}' contains control or whitespace byte {byte}")]
    ControlCharacter { segment: String, byte: u8 },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("duplicate parameter name '{param}' in pattern '{pattern}'")]
    DuplicateParamName { param: String, pattern: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
