use super::*;

fn valid_fields() -> ContactMessage {
    ContactMessage {
        name: "A".into(),
        email: "a@b.co".into(),
        subject: "Hi".into(),
        message: "1234567890".into(),
    }
}

fn form_with(fields: &ContactMessage) -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(ContactField::Name, fields.name.clone());
    form.set_field(ContactField::Email, fields.email.clone());
    form.set_field(ContactField::Subject, fields.subject.clone());
    form.set_field(ContactField::Message, fields.message.clone());
    form
}

fn start(form: &mut ContactForm) -> SubmitTicket {
    match form.submit() {
        SubmitOutcome::Started(ticket, _) => ticket,
        other => panic!("expected Started, got {other:?}"),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn each_rule_reports_its_own_message() {
    let cases: [(fn(&mut ContactMessage), ValidationError, &str); 6] = [
        (|f| f.name = "  ".into(), ValidationError::NameRequired, "Error: Name is required"),
        (|f| f.email = String::new(), ValidationError::EmailRequired, "Error: Email is required"),
        (|f| f.email = "a@b".into(), ValidationError::EmailInvalid, "Error: Invalid email format"),
        (|f| f.subject = "\t".into(), ValidationError::SubjectRequired, "Error: Subject is required"),
        (|f| f.message = "   ".into(), ValidationError::MessageRequired, "Error: Message is required"),
        (
            |f| f.message = " 123456789 ".into(),
            ValidationError::MessageTooShort,
            "Error: Message must be at least 10 characters",
        ),
    ];

    for (break_field, expected, banner) in cases {
        let mut fields = valid_fields();
        break_field(&mut fields);
        let mut form = form_with(&fields);

        assert_eq!(form.submit(), SubmitOutcome::Rejected(expected));
        assert_eq!(form.status(), &FormStatus::Invalid(expected));
        assert_eq!(form.status_message().as_deref(), Some(banner));
        assert!(form.is_error());
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &fields, "fields must be untouched after {expected:?}");
    }
}

#[test]
fn first_failure_wins() {
    let form_fields = ContactMessage::default();
    assert_eq!(form_fields.validate(), Err(ValidationError::NameRequired));

    let fields = ContactMessage { name: "A".into(), email: "bad".into(), ..ContactMessage::default() };
    assert_eq!(fields.validate(), Err(ValidationError::EmailInvalid));
}

#[test]
fn email_pattern_accepts_simple_addresses() {
    for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@d.io", "a@b..c"] {
        assert!(is_valid_email(ok), "{ok} should be valid");
    }
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for bad in ["a@b", "@b.co", "a@.co", "a@b.", "a@@b.co", "a@b@c.co", "a b@c.co", " a@b.co", "ab.co"] {
        assert!(!is_valid_email(bad), "{bad} should be invalid");
    }
}

#[test]
fn message_length_counts_trimmed_chars() {
    let mut fields = valid_fields();
    fields.message = "éééééééééé".into();
    assert_eq!(fields.validate(), Ok(()));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn valid_submit_goes_submitting_then_sent_and_clears() {
    let mut form = form_with(&valid_fields());

    let outcome = form.submit();
    let SubmitOutcome::Started(ticket, message) = outcome else {
        panic!("expected Started");
    };
    assert_eq!(message, valid_fields());
    assert_eq!(form.status(), &FormStatus::Submitting);
    assert!(form.is_submitting());
    assert_eq!(form.status_message(), None);

    assert!(form.complete(ticket, Ok(())));
    assert_eq!(form.status(), &FormStatus::Sent);
    assert_eq!(form.fields(), &ContactMessage::default());
    assert_eq!(form.status_message().as_deref(), Some(SENT_MESSAGE));
    assert!(!form.is_error());
    assert!(!form.is_submitting());
}

#[test]
fn submit_while_submitting_is_ignored() {
    let mut form = form_with(&valid_fields());
    let ticket = start(&mut form);

    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert_eq!(form.status(), &FormStatus::Submitting);

    assert!(form.complete(ticket, Ok(())));
    assert_eq!(form.status(), &FormStatus::Sent);
}

#[test]
fn edits_are_ignored_while_submitting() {
    let mut form = form_with(&valid_fields());
    start(&mut form);
    form.set_field(ContactField::Name, "Changed".into());
    assert_eq!(form.field(ContactField::Name), "A");
}

#[test]
fn failure_keeps_fields_and_reenables() {
    let mut form = form_with(&valid_fields());
    let ticket = start(&mut form);

    assert!(form.complete(ticket, Err(SubmitError::default())));
    assert_eq!(form.status(), &FormStatus::Failed(SubmitError::default()));
    assert_eq!(form.fields(), &valid_fields());
    assert_eq!(
        form.status_message().as_deref(),
        Some("Error: Failed to send message. Please try again.")
    );
    assert!(!form.is_submitting());

    // Retry works.
    assert!(matches!(form.submit(), SubmitOutcome::Started(..)));
}

#[test]
fn stale_ticket_is_discarded() {
    let mut form = form_with(&valid_fields());
    let first = start(&mut form);
    assert!(form.complete(first, Err(SubmitError::default())));

    let second = start(&mut form);
    assert_ne!(first, second);
    assert!(!form.complete(first, Ok(())));
    assert_eq!(form.status(), &FormStatus::Submitting);
    assert_eq!(form.fields(), &valid_fields());
    assert!(form.complete(second, Ok(())));
}

#[test]
fn completion_after_abandon_is_discarded() {
    let mut form = form_with(&valid_fields());
    let ticket = start(&mut form);

    form.abandon();
    assert_eq!(form.status(), &FormStatus::Idle);
    assert!(!form.is_submitting());

    assert!(!form.complete(ticket, Ok(())));
    assert_eq!(form.fields(), &valid_fields());
    assert_eq!(form.status(), &FormStatus::Idle);
}

#[test]
fn abandon_when_idle_keeps_status() {
    let mut form = ContactForm::default();
    form.submit();
    form.abandon();
    assert_eq!(form.status(), &FormStatus::Invalid(ValidationError::NameRequired));
}

#[test]
fn field_values_default_to_empty_strings() {
    let form = ContactForm::default();
    for field in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
        assert_eq!(form.field(field), "");
    }
    assert_eq!(form.status(), &FormStatus::Idle);
}
