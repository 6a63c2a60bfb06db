use chrono::{DateTime, Utc};

use crate::{
    domain::{
        RawRsvpForm, RsvpSubmission, CHILD_NAME_MAX_CHARS, NOTES_MAX_CHARS, PARENT_NAME_MAX_CHARS,
    },
    error::{RequiredField, ValidationError},
    sanitize::{normalize_phone, parse_quantity, sanitize_text},
};

/// Sanitizes every field and checks the required ones.
///
/// Age is passed through untouched; it only has to contain something other
/// than whitespace.
pub fn validate_form(
    form: &RawRsvpForm,
    created_at: DateTime<Utc>,
) -> Result<RsvpSubmission, ValidationError> {
    let submission = RsvpSubmission {
        created_at,
        parent_name: sanitize_text(&form.parent_name, PARENT_NAME_MAX_CHARS),
        phone: normalize_phone(&form.phone),
        child_name: sanitize_text(&form.child_name, CHILD_NAME_MAX_CHARS),
        age: form.age.clone(),
        qty: parse_quantity(&form.qty),
        notes: sanitize_text(&form.notes, NOTES_MAX_CHARS),
    };

    let mut missing = Vec::new();
    if submission.parent_name.is_empty() {
        missing.push(RequiredField::ParentName);
    }
    if submission.phone.is_empty() {
        missing.push(RequiredField::Phone);
    }
    if submission.child_name.is_empty() {
        missing.push(RequiredField::ChildName);
    }
    if submission.age.trim().is_empty() {
        missing.push(RequiredField::Age);
    }
    if submission.qty == 0 {
        missing.push(RequiredField::Qty);
    }

    if missing.is_empty() {
        Ok(submission)
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawRsvpForm {
        RawRsvpForm {
            parent_name: "  Dana Reyes ".into(),
            phone: "(555) 010-0100 cell".into(),
            child_name: "Kit".into(),
            age: "6-8".into(),
            qty: "2".into(),
            notes: "  peanut allergy  ".into(),
        }
    }

    #[test]
    fn accepts_complete_form_and_sanitizes_fields() {
        let now = Utc::now();
        let submission = validate_form(&filled(), now).expect("valid");
        assert_eq!(submission.parent_name, "Dana Reyes");
        assert_eq!(submission.phone, "(555) 010-0100");
        assert_eq!(submission.qty, 2);
        assert_eq!(submission.notes, "peanut allergy");
        assert_eq!(submission.created_at, now);
    }

    #[test]
    fn notes_are_optional_and_qty_defaults_to_one() {
        let mut form = filled();
        form.notes.clear();
        form.qty = "many".into();
        let submission = validate_form(&form, Utc::now()).expect("valid");
        assert_eq!(submission.qty, 1);
        assert!(submission.notes.is_empty());
    }

    #[test]
    fn reports_every_missing_field() {
        let form = RawRsvpForm {
            parent_name: "   ".into(),
            phone: "no digits".into(),
            child_name: String::new(),
            age: " ".into(),
            qty: "0".into(),
            notes: String::new(),
        };
        let err = validate_form(&form, Utc::now()).expect_err("invalid");
        assert_eq!(
            err.missing_fields(),
            &[
                RequiredField::ParentName,
                RequiredField::Phone,
                RequiredField::ChildName,
                RequiredField::Age,
                RequiredField::Qty,
            ]
        );
        assert!(err.to_string().contains("parent name"));
    }

    #[test]
    fn default_form_is_invalid_except_quantity() {
        let err = validate_form(&RawRsvpForm::default(), Utc::now()).expect_err("invalid");
        assert!(!err.missing_fields().contains(&RequiredField::Qty));
    }
}
