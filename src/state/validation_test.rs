use super::*;

fn login(email: &str, password: &str) -> LoginCredentials {
    LoginCredentials { email: email.to_owned(), password: password.to_owned() }
}

fn reset(new_password: &str, confirm_password: &str) -> PasswordResetInput {
    PasswordResetInput { new_password: new_password.to_owned(), confirm_password: confirm_password.to_owned() }
}

// =============================================================
// validate_login
// =============================================================

#[test]
fn valid_login_has_no_errors() {
    assert!(validate_login(&login("a@b.com", "secret")).is_empty());
}

#[test]
fn empty_email_is_flagged() {
    let errors = validate_login(&login("", "secret"));
    assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn emails_without_separated_segments_are_flagged() {
    for email in ["plainaddress", "@example.com", "user@", "@", "user.example.com"] {
        let errors = validate_login(&login(email, "secret"));
        assert!(errors.contains(Field::Email), "expected {email:?} to be flagged");
        assert!(!errors.contains(Field::Password));
    }
}

#[test]
fn short_login_password_is_flagged() {
    for password in ["", "a", "12345"] {
        let errors = validate_login(&login("a@b.com", password));
        assert_eq!(errors.get(Field::Password), Some("Password must be at least 6 characters"));
        assert!(!errors.contains(Field::Email));
    }
}

#[test]
fn six_char_login_password_passes() {
    assert!(!validate_login(&login("a@b.com", "123456")).contains(Field::Password));
    assert!(!validate_login(&login("a@b.com", "a much longer passphrase")).contains(Field::Password));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // Three two-byte characters: six bytes but only three characters.
    assert!(validate_login(&login("a@b.com", "ééé")).contains(Field::Password));
    assert!(!validate_login(&login("a@b.com", "éééééé")).contains(Field::Password));
}

#[test]
fn both_login_fields_flagged_together() {
    let errors = validate_login(&login("nope", "abc"));
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email, Field::Password]);
}

#[test]
fn validate_login_is_idempotent() {
    let input = login("broken", "x");
    assert_eq!(validate_login(&input), validate_login(&input));
}

// =============================================================
// validate_password_reset
// =============================================================

#[test]
fn matching_reset_passwords_pass() {
    assert!(validate_password_reset(&reset("longpass", "longpass")).is_empty());
}

#[test]
fn short_new_password_is_flagged() {
    let errors = validate_password_reset(&reset("abc", "abc"));
    assert_eq!(errors.get(Field::NewPassword), Some("Password must be at least 6 characters."));
    assert!(errors.contains(Field::ConfirmPassword));
}

#[test]
fn mismatch_flags_only_confirm_password() {
    for (new_password, confirm) in [("secret1", "secret2"), ("longpassword", "longpasswore"), ("abcdef", "ABCDEF")] {
        let errors = validate_password_reset(&reset(new_password, confirm));
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match."));
        assert!(!errors.contains(Field::NewPassword));
        assert_eq!(errors.len(), 1);
    }
}

#[test]
fn short_confirm_password_reports_length_first() {
    let errors = validate_password_reset(&reset("secret1", "abc"));
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Password must be at least 6 characters."));
    assert!(!errors.contains(Field::NewPassword));
}

#[test]
fn field_names_match_form_markup() {
    assert_eq!(Field::Email.as_str(), "email");
    assert_eq!(Field::Password.as_str(), "password");
    assert_eq!(Field::NewPassword.as_str(), "newPassword");
    assert_eq!(Field::ConfirmPassword.as_str(), "confirmPassword");
}
