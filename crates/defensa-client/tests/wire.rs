//! Wire-level details that do not need a live backend: query-parameter
//! building and the response envelopes the endpoints unwrap.

use defensa_client::{ProfessorSearch, StudentSearch, name_options_from, options_from};
use defensa_model::{ActionOutcome, DataEnvelope, RefItem, ResultEnvelope, Student};

// --- query parameters ---

#[test]
fn student_search_omits_unset_filters() {
    let filter = StudentSearch {
        name: String::new(),
        year: None,
        province: None,
    };
    assert_eq!(filter.query_params(), vec![("name", String::new())]);

    let filter = StudentSearch {
        name: "Ana".to_string(),
        year: Some(3),
        province: Some("Camagüey".to_string()),
    };
    assert_eq!(
        filter.query_params(),
        vec![
            ("name", "Ana".to_string()),
            ("year", "3".to_string()),
            ("province", "Camagüey".to_string()),
        ]
    );
}

#[test]
fn professor_search_serializes_the_tristate_abroad_flag() {
    let filter = ProfessorSearch::default();
    assert!(filter.query_params().is_empty());

    let filter = ProfessorSearch {
        province: Some("La Habana".to_string()),
        municipality: None,
        went_abroad: Some(false),
        academic_rank: Some("Titular".to_string()),
    };
    assert_eq!(
        filter.query_params(),
        vec![
            ("province", "La Habana".to_string()),
            ("wentAbroad", "false".to_string()),
            ("academicRank", "Titular".to_string()),
        ]
    );
}

// --- envelopes ---

#[test]
fn search_results_arrive_in_a_result_envelope() {
    let json = r#"{"result": [{
        "firstName": "Ana", "lastName": "Pérez", "gender": "F",
        "birthDate": "2001-04-18", "major": "Informática", "year": 2,
        "teacherAverage": 4.5,
        "address": {"street": "Martí", "number": "12",
                    "idProvince": 1, "idMunicipality": 10,
                    "province": "La Habana", "municipality": "Plaza"}
    }]}"#;
    let envelope: ResultEnvelope<Vec<Student>> =
        serde_json::from_str(json).expect("deserialize search payload");
    assert_eq!(envelope.result.len(), 1);
    assert_eq!(
        envelope.result[0].address.municipality.as_deref(),
        Some("Plaza")
    );
}

#[test]
fn single_record_reads_arrive_in_a_data_envelope() {
    let json = r#"{"data": {"id": 1, "name": "La Habana"}}"#;
    let envelope: DataEnvelope<RefItem> = serde_json::from_str(json).expect("deserialize");
    assert_eq!(envelope.data.id, 1);
}

#[test]
fn approval_outcome_tolerates_a_missing_message() {
    let outcome: ActionOutcome =
        serde_json::from_str(r#"{"success": true}"#).expect("deserialize");
    assert!(outcome.success);
    assert_eq!(outcome.message, None);
}

// --- option mapping ---

#[test]
fn catalog_rows_become_options_in_backend_order() {
    let options = options_from(vec![
        RefItem { id: 2, name: "Matanzas".to_string() },
        RefItem { id: 1, name: "La Habana".to_string() },
    ]);
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label, "Matanzas");
    assert_eq!(options[0].value, 2);
}

#[test]
fn complement_rows_are_keyed_by_name() {
    let options = name_options_from(vec![RefItem {
        id: 4,
        name: "Titular".to_string(),
    }]);
    assert_eq!(options[0].label, "Titular");
    assert_eq!(options[0].value, "Titular");
}
