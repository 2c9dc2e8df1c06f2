//! Form Submit Lifecycle
//!
//! Shared settle logic for the three entity forms: a successful submit
//! shows the confirmation and clears the draft, a failed one shows the
//! backend's message and leaves the draft untouched for a retry.

use leptos::*;

/// Apply a settled submit outcome to a form's message and draft fields.
///
/// Returns `true` on success so the caller can fire its advance callback.
pub fn apply_submit_outcome<T>(
    result: Result<T, String>,
    set_message: WriteSignal<String>,
    success_message: &str,
    fields: &[WriteSignal<String>],
) -> bool {
    match result {
        Ok(_) => {
            set_message.set(success_message.to_string());
            for field in fields {
                field.set(String::new());
            }
            true
        }
        Err(e) => {
            set_message.set(e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_clears_draft_and_shows_confirmation() {
        let runtime = create_runtime();

        let (name, set_name) = create_signal("Ada".to_string());
        let (email, set_email) = create_signal("ada@example.com".to_string());
        let (age, set_age) = create_signal("36".to_string());
        let (message, set_message) = create_signal(String::new());

        let advanced = apply_submit_outcome(
            Ok(json!({"id": 1})),
            set_message,
            "Profile saved",
            &[set_name, set_email, set_age],
        );

        assert!(advanced);
        assert_eq!(message.get_untracked(), "Profile saved");
        assert_eq!(name.get_untracked(), "");
        assert_eq!(email.get_untracked(), "");
        assert_eq!(age.get_untracked(), "");

        runtime.dispose();
    }

    #[test]
    fn test_failure_preserves_draft_and_shows_backend_message() {
        let runtime = create_runtime();

        let (name, set_name) = create_signal("Ada".to_string());
        let (email, set_email) = create_signal("ada@example.com".to_string());
        let (message, set_message) = create_signal(String::new());

        let advanced = apply_submit_outcome::<serde_json::Value>(
            Err("email already registered".to_string()),
            set_message,
            "Profile saved",
            &[set_name, set_email],
        );

        assert!(!advanced);
        assert_eq!(message.get_untracked(), "email already registered");
        assert_eq!(name.get_untracked(), "Ada");
        assert_eq!(email.get_untracked(), "ada@example.com");

        runtime.dispose();
    }
}
