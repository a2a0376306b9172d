use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::NormalizationOptions;

pub const DEFAULT_MAX_PATH_LENGTH: usize = 8 * 1024;

/// Path handling for a [`Router`](crate::Router) or
/// [`FilterSet`](crate::FilterSet).
///
/// The same normalization runs on registered patterns and on request paths.
/// With the defaults, `add("/a//b")` registers `/a/b` and a trailing slash is
/// dropped from both sides, so `/assets/*file` never sees `/assets/` and an
/// empty middle segment never reaches the trie. Set `allow_duplicate_slash`
/// or `strict_trailing_slash` to keep them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Collapse repeated slashes and drop trailing slashes before matching.
    pub normalize_path: bool,
    pub strict_trailing_slash: bool,
    pub allow_duplicate_slash: bool,
    pub max_path_length: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            normalize_path: true,
            strict_trailing_slash: false,
            allow_duplicate_slash: false,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_path_length == 0 {
            return Err(RouterOptionsError::MaxPathLengthInvalid {
                provided: self.max_path_length,
            });
        }
        Ok(())
    }

    pub fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            normalize_path: self.normalize_path,
            allow_duplicate_slash: self.allow_duplicate_slash,
            strict_trailing_slash: self.strict_trailing_slash,
            max_length: self.max_path_length,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn normalize_path(mut self, value: bool) -> Self {
        self.options.normalize_path = value;
        self
    }

    pub fn strict_trailing_slash(mut self, value: bool) -> Self {
        self.options.strict_trailing_slash = value;
        self
    }

    pub fn allow_duplicate_slash(mut self, value: bool) -> Self {
        self.options.allow_duplicate_slash = value;
        self
    }

    pub fn max_path_length(mut self, value: usize) -> Self {
        self.options.max_path_length = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_path_length must be at least 1 (got {provided})")]
    MaxPathLengthInvalid { provided: usize },
}
