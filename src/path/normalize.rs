use std::borrow::Cow;

use crate::path::{PathError, PathResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    pub normalize_path: bool,
    pub allow_duplicate_slash: bool,
    pub strict_trailing_slash: bool,
    pub max_length: usize,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            normalize_path: true,
            allow_duplicate_slash: false,
            strict_trailing_slash: false,
            max_length: 8 * 1024,
        }
    }
}

/// Validates `path` and, when enabled, collapses repeated slashes and drops a
/// trailing slash. Returns the input unchanged (borrowed) whenever it is
/// already in normal form.
#[inline]
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len=path.len() as u64))]
pub fn normalize_path<'a>(path: &'a str, options: &NormalizationOptions) -> PathResult<Cow<'a, str>> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    if path.len() > options.max_length {
        return Err(PathError::TooLong {
            length: path.len(),
            limit: options.max_length,
        });
    }

    if let Some(&byte) = path.as_bytes().iter().find(|&&b| b <= 0x20 || b == 0x7f) {
        return Err(PathError::ControlOrWhitespace {
            input: path.to_string(),
            byte,
        });
    }

    if path.split('/').any(|segment| segment == "..") {
        return Err(PathError::InvalidParentTraversal {
            input: path.to_string(),
        });
    }

    if !options.normalize_path {
        return Ok(Cow::Borrowed(path));
    }

    let collapse = !options.allow_duplicate_slash && path.contains("//");
    let trim = !options.strict_trailing_slash && path.len() > 1 && path.ends_with('/');

    if !collapse && !trim {
        return Ok(Cow::Borrowed(path));
    }

    let mut output = String::with_capacity(path.len());
    let mut prev_was_slash = false;
    for ch in path.chars() {
        if ch == '/' {
            if collapse && prev_was_slash {
                continue;
            }
            prev_was_slash = true;
        } else {
            prev_was_slash = false;
        }
        output.push(ch);
    }

    if trim {
        while output.len() > 1 && output.ends_with('/') {
            output.pop();
        }
    }

    Ok(Cow::Owned(output))
}
