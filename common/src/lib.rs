use validator::ValidationErrors;

/// Flattens `validator` errors into a single human-readable string,
/// joining the per-field messages with `"; "`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::format_validation_errors;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn formats_field_messages() {
        let probe = Probe {
            email: "not-an-email".into(),
        };
        let errs = probe.validate().unwrap_err();
        assert_eq!(format_validation_errors(&errs), "Invalid email format");
    }
}
