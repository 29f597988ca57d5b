//! Domain model (type names, rules, candidates, reports).

pub mod candidate;
pub mod report;
pub mod rule;
pub mod type_name;

pub use self::report::{ValidationReport, Violation};
pub use self::rule::Rule;
pub use self::type_name::TypeName;
