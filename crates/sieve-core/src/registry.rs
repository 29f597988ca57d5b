//! Validator registry: the rule table plus the validation pass.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Rule, TypeName, ValidationReport, Violation, candidate};
use crate::error::SieveError;
use crate::typed::Validatable;

/// Ordered rule lists for one type, keyed by field name.
///
/// Field iteration is sorted (BTreeMap) so failure attribution is
/// deterministic. Each rule list keeps insertion order; duplicates are
/// allowed and each occurrence is re-checked.
pub type FieldRules = BTreeMap<String, Vec<Rule>>;

/// Registry of validation rules (type_name -> field -> rules).
///
/// Design:
/// - Built during initialization (mutable).
/// - Used during validation (immutable).
/// This avoids locks: build the registry once, then share it (e.g. behind
/// `Arc`) and the type system forbids concurrent mutation.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    types: HashMap<TypeName, FieldRules>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Register one rule for a field of a type.
    ///
    /// Appends to the field's rule list, creating the type and field entries
    /// if absent. Rule lists are only ever appended to, never replaced.
    /// Always succeeds.
    pub fn register(&mut self, type_name: TypeName, field: impl Into<String>, rule: Rule) {
        self.types
            .entry(type_name)
            .or_default()
            .entry(field.into())
            .or_default()
            .push(rule);
    }

    /// Install a type's declared rule set under `T::TYPE` in one call.
    ///
    /// Unlike [`register`](Self::register), a whole-type declaration is not
    /// an additive amendment: declaring a type that already has an entry is
    /// a setup bug and reported as an error.
    pub fn register_type<T: Validatable>(&mut self) -> Result<(), SieveError> {
        let type_name = TypeName::new(T::TYPE);
        if self.types.contains_key(&type_name) {
            return Err(SieveError::AlreadyDeclared(type_name));
        }
        let mut fields = FieldRules::new();
        for (field, rule) in T::rules() {
            fields.entry(field.to_string()).or_default().push(rule);
        }
        self.types.insert(type_name, fields);
        Ok(())
    }

    /// Evaluate every registered rule for `type_name` against `candidate`.
    ///
    /// All rules are evaluated (no short-circuiting), so the report carries
    /// every failed (field, rule) pair, in sorted field order. A type with
    /// no entry has nothing to check and yields an empty report.
    pub fn check(&self, type_name: &TypeName, candidate: &Value) -> ValidationReport {
        let Some(fields) = self.types.get(type_name) else {
            return ValidationReport::default();
        };

        let mut violations = Vec::new();
        for (field, rules) in fields {
            let value = candidate::field(candidate, field);
            for rule in rules {
                if !rule.check(value) {
                    violations.push(Violation {
                        field: field.clone(),
                        rule: rule.clone(),
                    });
                }
            }
        }
        ValidationReport::new(violations)
    }

    /// Boolean form of [`check`](Self::check): the logical AND of every rule
    /// evaluation across every field.
    ///
    /// An unknown type is vacuously valid. Never panics and never returns
    /// an error; callers decide what to do with a failed candidate.
    pub fn validate(&self, type_name: &TypeName, candidate: &Value) -> bool {
        self.check(type_name, candidate).is_valid()
    }

    /// True if the type has at least one rule registered.
    ///
    /// A type declared with zero rules behaves exactly like an unknown type
    /// here and in [`validate`](Self::validate); the two are distinguishable
    /// only via [`registered_types`](Self::registered_types).
    pub fn has_rules(&self, type_name: &TypeName) -> bool {
        self.types
            .get(type_name)
            .is_some_and(|fields| fields.values().any(|rules| !rules.is_empty()))
    }

    /// Every type with an entry, sorted by name.
    pub fn registered_types(&self) -> Vec<TypeName> {
        let mut names: Vec<TypeName> = self.types.keys().cloned().collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Aggregate totals for status reporting.
    pub fn counts(&self) -> RegistryCounts {
        RegistryCounts {
            types: self.types.len(),
            fields: self.types.values().map(BTreeMap::len).sum(),
            rules: self
                .types
                .values()
                .flat_map(BTreeMap::values)
                .map(Vec::len)
                .sum(),
        }
    }
}

/// Serializable view of registry size, for logs and status endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryCounts {
    pub types: usize,
    pub fields: usize,
    pub rules: usize,
}
