//! Typed - 型付き宣言 API
//!
//! type_name の typo を型で排除し、ある型のルール一式を
//! ひとつの impl にまとめて宣言できるようにします。
//!
//! # 学習ポイント
//! - Associated constants (`const TYPE`) で型と type_name を静的に対応付ける
//! - 宣言（`rules`）と登録（`register_type`）を分離する：登録は setup 時の
//!   明示的な呼び出しであって、宣言時の暗黙の副作用ではない

use crate::domain::Rule;

/// Associates a Rust type with a registry key and its declared rule set.
///
/// # 使用例
/// ```
/// use sieve_core::{Rule, Validatable, ValidatorRegistry};
///
/// struct Course;
///
/// impl Validatable for Course {
///     const TYPE: &'static str = "course";
///
///     fn rules() -> Vec<(&'static str, Rule)> {
///         vec![
///             ("title", Rule::Required),
///             ("price", Rule::PositiveNumber),
///         ]
///     }
/// }
///
/// let mut registry = ValidatorRegistry::new();
/// registry.register_type::<Course>().unwrap();
/// assert!(registry.validate(
///     &sieve_core::TypeName::new(Course::TYPE),
///     &serde_json::json!({ "title": "TS", "price": 10 }),
/// ));
/// ```
pub trait Validatable {
    /// Registry key for this type.
    const TYPE: &'static str;

    /// Declared (field, rule) pairs, in declaration order.
    ///
    /// The same field may appear more than once; every occurrence is
    /// appended and re-checked.
    fn rules() -> Vec<(&'static str, Rule)>;
}
