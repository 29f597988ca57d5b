use thiserror::Error;

use crate::domain::TypeName;

#[derive(Debug, Error)]
pub enum SieveError {
    #[error("rules already declared for type_name={0}")]
    AlreadyDeclared(TypeName),
}
