//! Shared field rules, exercised the way the forms use them.

use chrono::NaiveDate;
use defensa_validate::{
    DateError, FieldKind, FormCheck, PasswordStrength, age_on, format_display, parse_birth_date,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// --- character sets ---

#[test]
fn person_names_accept_accents_and_spaces() {
    assert!(FieldKind::PersonName.accepts("María José"));
    assert!(FieldKind::PersonName.accepts("Ñico"));
    assert!(!FieldKind::PersonName.accepts("Ana3"));
    assert!(!FieldKind::PersonName.accepts("O'Brien"));
}

#[test]
fn usernames_allow_dots_and_underscores_within_bounds() {
    assert!(FieldKind::Username.accepts("ana.perez_99"));
    assert!(!FieldKind::Username.accepts("ana"));
    assert!(!FieldKind::Username.accepts("con espacio"));
    assert!(!FieldKind::Username.accepts("a".repeat(21).as_str()));
}

#[test]
fn emails_need_mailbox_domain_and_tld() {
    assert!(FieldKind::Email.accepts("ana@reduc.edu.cu"));
    assert!(!FieldKind::Email.accepts("ana@reduc"));
    assert!(!FieldKind::Email.accepts("ana reduc@edu.cu"));
}

#[test]
fn streets_allow_dots_and_hyphens() {
    assert!(FieldKind::Street.accepts("Avda. Ignacio Agramonte - Norte"));
    assert!(!FieldKind::Street.accepts("Calle 24 #12"));
}

// --- password strength ---

#[test]
fn password_checklist_tracks_each_rule() {
    let weak = PasswordStrength::evaluate("abc");
    assert!(!weak.min_length && !weak.upper && weak.lower && !weak.digit && !weak.symbol);
    assert!(!weak.is_strong());

    let strong = PasswordStrength::evaluate("Defensa#2025");
    assert!(strong.is_strong());
    assert!(strong.checklist().iter().all(|(_, ok)| *ok));
}

#[test]
fn password_kind_rejects_weak_values() {
    assert!(!FieldKind::Password.accepts("solominusculas1#"));
    assert!(FieldKind::Password.accepts("Clave.Fuerte9"));
}

// --- form aggregation ---

#[test]
fn form_check_collects_required_length_and_pattern_issues() {
    let report = FormCheck::new()
        .required("firstName", "  ")
        .field("lastName", FieldKind::PersonName, "Pérez2")
        .field("email", FieldKind::Email, &format!("{}@x.cu", "a".repeat(120)))
        .matching("confirmPassword", "abc", "abd", "Las contraseñas no coinciden.")
        .finish();

    assert!(!report.is_valid());
    assert_eq!(report.issues.len(), 4);
    assert_eq!(report.first_message(), Some("Este campo es obligatorio."));
    assert_eq!(
        report.message_for("confirmPassword"),
        Some("Las contraseñas no coinciden.")
    );
    assert_eq!(
        report.message_for("email"),
        Some("Máximo 100 caracteres permitidos.")
    );
}

#[test]
fn valid_form_produces_an_empty_report() {
    let report = FormCheck::new()
        .required("firstName", "Ana")
        .field("firstName", FieldKind::PersonName, "Ana")
        .required("username", "ana.perez")
        .field("username", FieldKind::Username, "ana.perez")
        .finish();
    assert!(report.is_valid());
    assert_eq!(report.first_message(), None);
}

#[test]
fn report_shape_is_stable() {
    let report = FormCheck::new()
        .required("firstName", "")
        .field("username", FieldKind::Username, "ab")
        .finish();
    insta::assert_json_snapshot!(report, @r###"
    {
      "issues": [
        {
          "field": "firstName",
          "message": "Este campo es obligatorio."
        },
        {
          "field": "username",
          "message": "El nombre de usuario solo permite letras, números, puntos y guiones bajos."
        }
      ]
    }
    "###);
}

// --- dates ---

#[test]
fn birth_dates_parse_and_reject_the_future() {
    let today = date(2025, 6, 1);
    assert_eq!(parse_birth_date("2001-04-18", today), Ok(date(2001, 4, 18)));
    assert_eq!(parse_birth_date("18/04/2001", today), Err(DateError::Invalid));
    assert_eq!(parse_birth_date("2026-01-01", today), Err(DateError::InFuture));
}

#[test]
fn age_is_month_and_day_aware() {
    let birth = date(2000, 6, 15);
    assert_eq!(age_on(birth, date(2025, 6, 14)), 24);
    assert_eq!(age_on(birth, date(2025, 6, 15)), 25);
    assert_eq!(age_on(birth, date(2025, 7, 1)), 25);
}

#[test]
fn dates_display_as_day_month_year() {
    assert_eq!(format_display(date(2001, 4, 18)), "18/04/2001");
}
