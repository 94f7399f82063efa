//! Name normalization and validation.
//!
//! Free text is reduced to letters, apostrophes, hyphens and spaces, then split into
//! parts. Part-count and part-length bounds are hard rejects; nothing is truncated.

use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};

/// Bounds on the number of name parts and on each part's clean length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameLimits {
    pub max_parts: usize,
    pub max_part_len: usize,
}

impl NameLimits {
    /// One given name plus up to seven surnames, 25 letters each.
    pub const FULL: Self = Self {
        max_parts: 8,
        max_part_len: 25,
    };

    /// Shorter variant: up to six parts of 15 letters.
    pub const COMPACT: Self = Self {
        max_parts: 6,
        max_part_len: 15,
    };

    pub const MIN_PARTS: usize = 1;
    pub const MIN_PART_LEN: usize = 1;
}

impl Default for NameLimits {
    fn default() -> Self {
        Self::FULL
    }
}

/// Validated name: ordered parts and their space-joined form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    parts: Vec<String>,
}

impl NormalizedName {
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn full(&self) -> String {
        self.parts.join(" ")
    }
}

/// Letters, the Latin-1 accented range `À..=ú`, apostrophe, hyphen and space survive cleaning.
fn is_kept(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FA}').contains(&c) || matches!(c, '\'' | '-' | ' ')
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '\'' | '-')
}

/// Length without hyphens and apostrophes.
pub fn clean_length(part: &str) -> usize {
    part.chars().filter(|c| !matches!(c, '\'' | '-')).count()
}

pub fn normalize_name(raw: &str, limits: NameLimits) -> Result<NormalizedName, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let cleaned: String = raw.chars().filter(|c| is_kept(*c)).collect();
    let cleaned = cleaned.trim();
    let parts: Vec<String> = cleaned
        .split(|c: char| !is_token_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if !(NameLimits::MIN_PARTS..=limits.max_parts).contains(&parts.len()) {
        return Err(ValidationError::PartCount {
            name: cleaned.to_string(),
            count: parts.len(),
            min: NameLimits::MIN_PARTS,
            max: limits.max_parts,
        });
    }

    if let Some(part) = parts
        .iter()
        .find(|p| !(NameLimits::MIN_PART_LEN..=limits.max_part_len).contains(&clean_length(p)))
    {
        return Err(ValidationError::PartLength {
            part: part.clone(),
            length: clean_length(part),
            min: NameLimits::MIN_PART_LEN,
            max: limits.max_part_len,
        });
    }

    Ok(NormalizedName { parts })
}
