use crate::generators::random_sequence;
use crate::errors::InputError;

use std::fmt;

use rand::Rng;

/// Minimum random length accepted for [`PasswordStyle::Random`].
pub const MIN_RANDOM_LENGTH: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStyle {
    Random,
    Pattern,
    PatternScope,
}

impl PasswordStyle {
    pub fn uses_pattern(self) -> bool {
        matches!(self, PasswordStyle::Pattern | PasswordStyle::PatternScope)
    }

    pub fn uses_scope(self) -> bool {
        self == PasswordStyle::PatternScope
    }

    /// Only the fully random style has a lower bound on the random length.
    pub fn min_length(self) -> Option<i64> {
        match self {
            PasswordStyle::Random => Some(MIN_RANDOM_LENGTH),
            PasswordStyle::Pattern | PasswordStyle::PatternScope => None,
        }
    }

    pub fn check_length(self, length: i64) -> Result<i64, InputError> {
        match self.min_length() {
            Some(min) if length < min => Err(InputError::TooShort { min, got: length }),
            _ => Ok(length),
        }
    }
}

impl TryFrom<i64> for PasswordStyle {
    type Error = InputError;

    fn try_from(selector: i64) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(PasswordStyle::Random),
            2 => Ok(PasswordStyle::Pattern),
            3 => Ok(PasswordStyle::PatternScope),
            other => Err(InputError::UnknownStyle(other)),
        }
    }
}

impl fmt::Display for PasswordStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PasswordStyle::Random => write!(f, "random"),
            PasswordStyle::Pattern => write!(f, "pattern + random"),
            PasswordStyle::PatternScope => write!(f, "pattern + scope + random"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    pub style: PasswordStyle,
    pub pattern: String,
    pub scope: String,
    pub length: i64,
}

impl PasswordRequest {
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let generated = random_sequence(rng, self.length);
        format_password(self.style, &self.pattern, &self.scope, &generated)
    }
}

pub fn format_password(style: PasswordStyle, pattern: &str, scope: &str, generated: &str) -> String {
    match style {
        PasswordStyle::Random => generated.to_string(),
        PasswordStyle::Pattern => format!("{}.-{}!", pattern, generated),
        PasswordStyle::PatternScope => format!("{}.-{}.{}!", pattern, scope, generated),
    }
}
