use super::machine::FormKind;
use super::status::SubmissionStatus;
use crate::sink::SinkError;

const STRUCTURED_FALLBACK: &str = "Something went wrong. Please try again later.";
const UNEXPECTED_FALLBACK: &str = "An unexpected error occurred. Please try again.";

/// Maps a failed insert to the banner for form kind `K`.
pub fn status_for_failure<K: FormKind>(err: &SinkError) -> SubmissionStatus {
    match err {
        SinkError::Rejected { message, .. } => {
            if err.is_unique_violation() {
                if let Some(duplicate) = K::DUPLICATE_MESSAGE {
                    return SubmissionStatus::success(duplicate);
                }
            }
            if err.is_missing_relation() {
                SubmissionStatus::failure(format!("Configuration error: {} table not found", K::LABEL))
            } else if err.is_permission_denied() {
                SubmissionStatus::failure("Configuration error: Permission denied")
            } else if message.is_empty() {
                SubmissionStatus::failure(format!("Error: {}", STRUCTURED_FALLBACK))
            } else {
                SubmissionStatus::failure(format!("Error: {}", message))
            }
        }
        SinkError::Transport(_) | SinkError::Timeout(_) => {
            let message = err.to_string();
            if message.is_empty() {
                SubmissionStatus::failure(UNEXPECTED_FALLBACK)
            } else {
                SubmissionStatus::failure(format!("Error: {}", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::Contact;
    use crate::forms::waitlist::Waitlist;

    #[test]
    fn duplicate_counts_as_joined_for_waitlist_only() {
        let dup = SinkError::rejected("23505", "duplicate key value violates unique constraint");
        assert_eq!(
            status_for_failure::<Waitlist>(&dup),
            SubmissionStatus::success("You're already on our waitlist!")
        );
        assert_eq!(
            status_for_failure::<Contact>(&dup),
            SubmissionStatus::failure("Error: duplicate key value violates unique constraint")
        );
    }

    #[test]
    fn missing_table_names_the_form() {
        let missing = SinkError::rejected("42P01", "relation does not exist");
        assert_eq!(
            status_for_failure::<Waitlist>(&missing).message,
            "Configuration error: Waitlist table not found"
        );
        assert_eq!(
            status_for_failure::<Contact>(&missing).message,
            "Configuration error: Contact table not found"
        );
    }

    #[test]
    fn permission_denied() {
        let denied = SinkError::rejected("", "permission denied for table contactUs");
        assert_eq!(
            status_for_failure::<Contact>(&denied),
            SubmissionStatus::failure("Configuration error: Permission denied")
        );
    }

    #[test]
    fn other_structured_errors() {
        assert_eq!(
            status_for_failure::<Waitlist>(&SinkError::rejected("22001", "value too long")).message,
            "Error: value too long"
        );
        assert_eq!(
            status_for_failure::<Waitlist>(&SinkError::rejected("XX000", "")).message,
            "Error: Something went wrong. Please try again later."
        );
    }

    #[test]
    fn transport_errors() {
        assert_eq!(
            status_for_failure::<Contact>(&SinkError::Transport("Failed to fetch".into())),
            SubmissionStatus::failure("Error: Failed to fetch")
        );
        assert_eq!(
            status_for_failure::<Contact>(&SinkError::Transport(String::new())).message,
            "An unexpected error occurred. Please try again."
        );
        assert_eq!(
            status_for_failure::<Waitlist>(&SinkError::Timeout(15_000)).message,
            "Error: request timed out after 15000 ms"
        );
    }
}
