//! Rule - フィールド単位の検証ルール
//!
//! # 学習ポイント
//! - Closed enum + match によるディスパッチ：ルールの追加は
//!   variant ひとつと match arm ひとつの局所的な変更で済む
//! - タグ付き enum の serde 表現（kind/value）

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::candidate::is_truthy;

/// A single validation rule: a named, pure predicate over one field's value.
///
/// We intentionally keep this a closed set. Callers compose rules per field
/// in the registry instead of plugging in arbitrary predicate functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Rule {
    /// Value must be present and truthy.
    Required,

    /// Value must be a number strictly greater than zero.
    /// A numeric-looking string is not a number.
    PositiveNumber,

    /// Value must be a string with at least this many characters.
    MinLength(usize),

    /// Value must be a string with at most this many characters.
    MaxLength(usize),

    /// Value must be a number greater than or equal to this bound.
    Min(f64),

    /// Value must be a number less than or equal to this bound.
    Max(f64),
}

impl Rule {
    /// Evaluate this rule against a field value.
    ///
    /// `None` means the field is absent on the candidate. An absent field
    /// fails every rule: absent is not truthy, not a number, not a string.
    ///
    /// Evaluation is pure (no side effects), so the order rules run in can
    /// only affect failure attribution, never the verdict.
    pub fn check(&self, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Rule::Required => is_truthy(value),
            Rule::PositiveNumber => value.as_f64().is_some_and(|n| n > 0.0),
            Rule::MinLength(min) => value.as_str().is_some_and(|s| s.chars().count() >= *min),
            Rule::MaxLength(max) => value.as_str().is_some_and(|s| s.chars().count() <= *max),
            Rule::Min(min) => value.as_f64().is_some_and(|n| n >= *min),
            Rule::Max(max) => value.as_f64().is_some_and(|n| n <= *max),
        }
    }
}

/// Display describes the failure, for report output.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required value is missing or empty"),
            Rule::PositiveNumber => write!(f, "must be a number greater than zero"),
            Rule::MinLength(min) => write!(f, "must be at least {min} characters"),
            Rule::MaxLength(max) => write!(f, "must be at most {max} characters"),
            Rule::Min(min) => write!(f, "must be at least {min}"),
            Rule::Max(max) => write!(f, "must be at most {max}"),
        }
    }
}
