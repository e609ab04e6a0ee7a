use std::borrow::Cow;

use validator::{ValidationErrors, ValidationErrorsKind};

use super::app_error::ValidationIssue;

/// Flattens nested validator output into field-path issues, sorted for stable
/// responses.
pub(super) fn validation_issues(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    collect(None, errors, &mut issues);
    issues.sort_by(|left, right| {
        left.field
            .cmp(&right.field)
            .then(left.code.cmp(&right.code))
    });
    issues
}

fn collect(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<ValidationIssue>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| ValidationIssue {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(Cow::to_string)
                        .unwrap_or_else(|| format!("{path} is invalid")),
                    code: error.code.to_string(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(Some(&path), nested, out),
            ValidationErrorsKind::List(nested_items) => {
                for (index, nested) in nested_items {
                    collect(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}
