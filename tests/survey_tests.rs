mod common;

use cardio_risk::error::SurveyError;
use cardio_risk::survey::{Field, FieldInput, SurveyResponse};
use proptest::prelude::*;
use rstest::rstest;
use std::io::Write;
use strum::IntoEnumIterator;

#[test]
fn test_text_is_stored_raw_until_submission() {
    let survey = SurveyResponse::default()
        .update(Field::HeightCm, "  not a number ".into())
        .update(Field::AlcoholConsumption, "-3".into());

    assert_eq!(survey.height_cm, "  not a number ");
    assert_eq!(survey.alcohol_consumption, "-3");
}

#[test]
fn test_update_returns_new_snapshot_and_leaves_input_alone() {
    let before = common::example_survey();
    let after = before.clone().update(Field::WeightKg, "80".into());

    assert_eq!(before.weight_kg, "70");
    assert_eq!(after.weight_kg, "80");
    assert_eq!(after.height_cm, before.height_cm);
}

#[test]
fn test_flags_store_booleans() {
    let survey = SurveyResponse::default()
        .update(Field::Diabetes, FieldInput::Checked(true))
        .update(Field::SmokingHistory, "on".into())
        .update(Field::Arthritis, "false".into());

    assert_eq!(survey.checked(Field::Diabetes), Some(true));
    assert_eq!(survey.checked(Field::SmokingHistory), Some(true));
    assert_eq!(survey.checked(Field::Arthritis), Some(false));
}

#[test]
fn test_checked_value_on_text_field_becomes_code() {
    let survey = SurveyResponse::default().update(Field::FruitConsumption, true.into());
    assert_eq!(survey.fruit_consumption, "1");
}

#[test]
fn test_bmi_is_not_editable() {
    let before = common::example_survey();
    let after = before.clone().update(Field::Bmi, "99".into());
    assert_eq!(before, after);
}

#[rstest]
#[case(&[Field::SexFemale], true, false)]
#[case(&[Field::SexMale], false, true)]
#[case(&[Field::SexFemale, Field::SexMale], false, true)]
#[case(&[Field::SexMale, Field::SexFemale], true, false)]
#[case(&[Field::SexFemale, Field::SexFemale], true, false)]
fn test_sex_selection_is_exclusive(
    #[case] clicks: &[Field],
    #[case] female: bool,
    #[case] male: bool,
) {
    let survey = clicks
        .iter()
        .fold(SurveyResponse::default(), |s, f| s.update(*f, true.into()));

    assert_eq!(survey.sex_female, female);
    assert_eq!(survey.sex_male, male);
}

#[test]
fn test_clearing_one_sex_leaves_the_other() {
    let survey = SurveyResponse::default()
        .update(Field::SexMale, true.into())
        .update(Field::SexFemale, false.into());

    assert!(survey.sex_male);
    assert!(!survey.sex_female);
}

#[rstest]
#[case("General_Health", Field::GeneralHealth)]
#[case("general_health", Field::GeneralHealth)]
#[case("FriedPotato_Consumption", Field::FriedPotatoConsumption)]
#[case(" Sex_Male ", Field::SexMale)]
#[case("BMI", Field::Bmi)]
fn test_field_resolution(#[case] name: &str, #[case] expected: Field) {
    assert_eq!(Field::resolve(name).unwrap(), expected);
}

#[test]
fn test_unknown_field_is_invalid_input() {
    let err = SurveyResponse::default().apply("Cholesterol", "200").unwrap_err();
    assert!(matches!(err, SurveyError::InvalidInput(ref m) if m.contains("Cholesterol")));
}

#[test]
fn test_from_json_accepts_strings_numbers_and_booleans() {
    let json = r#"{
        "General_Health": "2",
        "Checkup": 0.2,
        "Exercise": true,
        "Height_cm": 170,
        "Weight_kg": "70.5",
        "Fruit_Consumption": null,
        "Sex_Male": true
    }"#;

    let survey = SurveyResponse::from_json_str(json).unwrap();
    assert_eq!(survey.general_health, "2");
    assert_eq!(survey.checkup, "0.2");
    assert!(survey.exercise);
    assert_eq!(survey.height_cm, "170");
    assert_eq!(survey.weight_kg, "70.5");
    assert_eq!(survey.fruit_consumption, "");
    assert!(survey.sex_male);
}

#[test]
fn test_from_json_keeps_sex_exclusive() {
    let survey =
        SurveyResponse::from_json_str(r#"{"Sex_Female": true, "Sex_Male": true}"#).unwrap();
    assert!(!(survey.sex_female && survey.sex_male));
}

#[rstest]
#[case(r#"[1, 2, 3]"#)]
#[case(r#"{"Height_cm": [170]}"#)]
fn test_from_json_rejects_bad_shapes(#[case] json: &str) {
    assert!(matches!(
        SurveyResponse::from_json_str(json),
        Err(SurveyError::Config(_))
    ));
}

#[test]
fn test_from_json_rejects_unknown_fields_and_bad_syntax() {
    assert!(matches!(
        SurveyResponse::from_json_str(r#"{"Shoe_Size": 42}"#),
        Err(SurveyError::InvalidInput(_))
    ));
    assert!(matches!(
        SurveyResponse::from_json_str("{"),
        Err(SurveyError::Json(_))
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Age_Category": "12", "Depression": true}}"#).unwrap();

    let survey = SurveyResponse::load_from_file(file.path()).unwrap();
    assert_eq!(survey.age_category, "12");
    assert!(survey.depression);

    assert!(matches!(
        SurveyResponse::load_from_file("/definitely/not/here.json"),
        Err(SurveyError::Io(_))
    ));
}

fn arb_edit() -> impl Strategy<Value = (Field, FieldInput)> {
    let fields: Vec<Field> = Field::iter().collect();
    let input = prop_oneof![
        any::<bool>().prop_map(FieldInput::Checked),
        "[ -~]{0,6}".prop_map(FieldInput::Text),
    ];
    (prop::sample::select(fields), input)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_sex_flags_never_both_set(edits in prop::collection::vec(arb_edit(), 0..40)) {
        let mut survey = SurveyResponse::default();
        for (field, input) in edits {
            survey = survey.update(field, input);
            prop_assert!(!(survey.sex_female && survey.sex_male));
        }
    }
}
