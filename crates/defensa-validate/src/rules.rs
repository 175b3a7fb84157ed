use std::sync::LazyLock;

use regex::Regex;

use crate::password::PasswordStrength;

/// Letters (including Spanish accented vowels and ñ) and spaces.
static PERSON_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("invalid person-name regex")
});

/// Letters, digits, dots and underscores, 4 to 20 characters.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._]{4,20}$").expect("invalid username regex"));

/// Loose mailbox@domain.tld shape; the backend does the real verification.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Letters, spaces, dots and hyphens.
static STREET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s.\-]+$").expect("invalid street regex")
});

/// The kinds of free-text fields the forms collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// First or last name of a person.
    PersonName,
    /// Account username.
    Username,
    /// Account e-mail address.
    Email,
    /// Account password (strength rules, see [`PasswordStrength`]).
    Password,
    /// Street of an address.
    Street,
    /// House number of an address (free-form, length-capped only).
    HouseNumber,
}

impl FieldKind {
    /// Maximum accepted length, as enforced by the input widgets.
    pub fn max_length(&self) -> usize {
        match self {
            FieldKind::PersonName | FieldKind::Email | FieldKind::Password => 100,
            FieldKind::Username => 20,
            FieldKind::Street => 150,
            FieldKind::HouseNumber => 10,
        }
    }

    /// Whether a non-empty value satisfies this kind's character rules.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldKind::PersonName => PERSON_NAME_REGEX.is_match(value),
            FieldKind::Username => USERNAME_REGEX.is_match(value),
            FieldKind::Email => EMAIL_REGEX.is_match(value),
            FieldKind::Password => PasswordStrength::evaluate(value).is_strong(),
            FieldKind::Street => STREET_REGEX.is_match(value),
            FieldKind::HouseNumber => true,
        }
    }

    /// Message shown when the character rules reject the value.
    pub fn message(&self) -> &'static str {
        match self {
            FieldKind::PersonName => "Solo se permiten letras y espacios.",
            FieldKind::Username => {
                "El nombre de usuario solo permite letras, números, puntos y guiones bajos."
            }
            FieldKind::Email => "El correo electrónico no es válido.",
            FieldKind::Password => {
                "La contraseña debe tener al menos 8 caracteres, una mayúscula, una minúscula, un número y un símbolo."
            }
            FieldKind::Street => "La calle solo permite letras, espacios, puntos y guiones.",
            FieldKind::HouseNumber => "El número no es válido.",
        }
    }
}
