// Failure classification - the single point turning relay errors into
// user-facing text

use crate::error::RelayError;

/// Fallback shown when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An unexpected error occurred while contacting the AI service.";

/// Map a completion failure to a message suitable for end-user display.
///
/// Total over the failure space: every error kind yields a non-empty string,
/// so callers never need to inspect the kind themselves.
pub fn classify(err: &RelayError, endpoint: &str, model: &str) -> String {
    match err {
        RelayError::Connection(_) => format!(
            "Could not connect to the completion service at {endpoint}. \
             Please ensure the service is running and accessible. \
             Is the model '{model}' installed?"
        ),
        RelayError::Api { .. } => {
            format!("The AI service returned an error: {err}. Check server logs.")
        }
        RelayError::Parse(_) => format!("Error processing the AI response: {err}."),
        other => {
            let message = other.to_string();
            if message.is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                message
            }
        }
    }
}
