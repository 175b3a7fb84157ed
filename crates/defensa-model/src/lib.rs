pub mod account;
pub mod address;
pub mod envelope;
pub mod error;
pub mod person;
pub mod reference;

pub use account::{NewUser, RegisteredUser};
pub use address::Address;
pub use envelope::{ActionOutcome, DataEnvelope, ErrorBody, LoginResponse, ResultEnvelope};
pub use error::ModelError;
pub use person::{Gender, Professor, Student};
pub use reference::RefItem;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_round_trips_in_camel_case() {
        let json = r#"{
            "id": 7,
            "firstName": "Ana",
            "lastName": "Pérez",
            "gender": "F",
            "birthDate": "2001-04-18",
            "major": "Informática",
            "year": 2,
            "teacherAverage": 4.5,
            "address": {
                "street": "Martí",
                "number": "12",
                "idProvince": 1,
                "idMunicipality": 10
            }
        }"#;
        let student: Student = serde_json::from_str(json).expect("deserialize student");
        assert_eq!(student.first_name, "Ana");
        assert_eq!(student.gender, Gender::Female);
        assert_eq!(student.address.id_municipality, Some(10));

        let back = serde_json::to_value(&student).expect("serialize student");
        assert_eq!(back["firstName"], "Ana");
        assert_eq!(back["address"]["idProvince"], 1);
    }

    #[test]
    fn gender_parses_wire_codes() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("f".parse::<Gender>(), Ok(Gender::Female));
        assert!("X".parse::<Gender>().is_err());
        assert_eq!(Gender::Female.code(), "F");
        assert_eq!(Gender::Female.label(), "Femenino");
    }

    #[test]
    fn result_envelope_unwraps() {
        let json = r#"{"result": [{"id": 1, "name": "La Habana"}]}"#;
        let envelope: ResultEnvelope<Vec<RefItem>> =
            serde_json::from_str(json).expect("deserialize envelope");
        assert_eq!(envelope.result.len(), 1);
        assert_eq!(envelope.result[0].name, "La Habana");
    }
}
