// Error reporting through tracing

use crate::types::ClinicError;

/// Log an error with its code and category
pub fn log_error(context: &str, error: &ClinicError) {
    if error.is_recoverable() {
        tracing::warn!(
            context = context,
            error_code = error.code(),
            error_kind = ?error.kind(),
            "{}",
            error
        );
    } else {
        tracing::error!(
            context = context,
            error_code = error.code(),
            error_kind = ?error.kind(),
            "{}",
            error
        );
    }
}
