pub mod comment_validator;
pub mod post_validator;

use super::active_model_validator::ValidationError;

/// Fold an optional field error into the running accumulator.
pub(crate) fn collect(acc: &mut Option<ValidationError>, err: Option<ValidationError>) {
    if let Some(err) = err {
        *acc = Some(match acc.take() {
            Some(existing) => existing.combine(err),
            None => err,
        });
    }
}
