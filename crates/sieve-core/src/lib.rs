//! sieve-core
//!
//! Core building blocks for the Sieve validation registry.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（type_name, rule, candidate, report）
//! - **registry**: ValidatorRegistry（型ごとのルール表と検証パス）
//! - **typed**: 型付き宣言 API（Validatable trait）
//! - **error**: エラー型
//!
//! # 設計方針
//! - 登録は setup 時の明示的な呼び出し（`&mut`）、検証は純粋な読み取り
//!   （`&self`）。組み立てたあとは `Arc` で共有すればロック不要。
//! - ルールは closed enum。追加は variant + match arm の局所的な変更。
//! - 検証の結果は boolean（`validate`）と failure attribution 付きの
//!   report（`check`）の二段構え。

pub mod domain;
pub mod error;
pub mod registry;
pub mod typed;

pub use domain::{Rule, TypeName, ValidationReport, Violation};
pub use error::SieveError;
pub use registry::{FieldRules, RegistryCounts, ValidatorRegistry};
pub use typed::Validatable;
