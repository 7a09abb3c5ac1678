//! The validate/convert contract as seen by presentation code

mod common;

use unitwise::{ConversionResult, Registry, Unitwise, Validation};

fn engine() -> Unitwise {
    common::init_tracing();
    Unitwise::with_reference_units()
}

#[test]
fn test_empty_input_is_a_no_op_for_every_pair() {
    let engine = engine();
    for (category, _) in engine.list_categories() {
        for (from, _) in engine.list_units(category).unwrap() {
            for (to, _) in engine.list_units(category).unwrap() {
                assert_eq!(engine.convert("", category, from, to), ConversionResult::empty());
                assert_eq!(engine.convert("-", category, from, to), ConversionResult::empty());
            }
        }
    }
}

#[test]
fn test_lone_minus_is_valid_everywhere() {
    let engine = engine();
    for (category, _) in engine.list_categories() {
        assert_eq!(engine.validate("-", category), Validation::valid());
    }
}

#[test]
fn test_validation_messages() {
    let engine = engine();
    assert_eq!(
        engine.validate("12a3", "length"),
        Validation { is_valid: false, error: Some("Please enter a valid number".to_string()) }
    );
    assert!(!engine.validate("-5", "length").is_valid);
    assert!(engine.validate("-5", "temperature").is_valid);
    assert!(!engine.validate(".", "volume").is_valid);
    assert!(!engine.validate("9999999999999999", "weight").is_valid);
}

#[test]
fn test_reference_conversions() {
    let engine = engine();
    assert_eq!(engine.convert("100", "temperature", "celsius", "fahrenheit").value, "212");
    assert_eq!(engine.convert("1", "length", "kilometer", "meter").value, "1000");
    assert_eq!(engine.convert("1", "volume", "cup", "fluidOunce").value, "8");
    assert_eq!(engine.convert("16", "weight", "ounce", "pound").value, "1");
}

#[test]
fn test_below_absolute_zero() {
    let engine = engine();
    let result = engine.convert("-300", "temperature", "celsius", "kelvin");
    assert_eq!(result.value, "");
    assert!(result.error.unwrap().contains("absolute zero"));
}

#[test]
fn test_scientific_text_rejected_but_produced() {
    let engine = engine();
    assert!(engine.convert("1e16", "length", "meter", "meter").is_error());
    let tiny = engine.convert("1", "weight", "milligram", "ton");
    assert_eq!(tiny.value, "1.0000e-9");
}

#[test]
fn test_result_json_shape() {
    let engine = engine();
    let json = serde_json::to_value(engine.convert("5", "length", "meter", "centimeter")).unwrap();
    assert_eq!(json, serde_json::json!({"value": "500", "error": null}));
}

#[test]
fn test_extended_registry_from_json() {
    common::init_tracing();
    let registry = Registry::from_json(
        r#"{"categories": [
            {"id": "time", "display_name": "Time", "units": [
                {"id": "second", "display_name": "Second", "factor": 1},
                {"id": "minute", "display_name": "Minute", "factor": 60},
                {"id": "hour", "display_name": "Hour", "factor": 3600}
            ]},
            {"id": "heat", "display_name": "Heat", "conversion": "temperature", "allow_negative": true,
             "units": [
                {"id": "kelvin", "display_name": "Kelvin"},
                {"id": "celsius", "display_name": "Celsius"}
            ]}
        ]}"#,
    )
    .unwrap();
    let engine = Unitwise::new(registry);

    assert_eq!(engine.convert("90", "time", "minute", "hour").value, "1.5");
    assert_eq!(engine.convert("0", "heat", "kelvin", "celsius").value, "-273.15");
    // First declared unit is kelvin, so the default floor is 0 K
    assert!(!engine.validate("-1", "heat").is_valid);
    assert!(engine.validate_for_unit("-1", "heat", "celsius").is_valid);
}
