pub mod active_model_validator;
pub mod field_validators;
pub mod models;

// Re-export common types and functions
pub use active_model_validator::{ActiveModelValidator, ValidationError, ValidationErrors};
pub use field_validators::FieldValidator;
