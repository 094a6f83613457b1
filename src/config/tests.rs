use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::config::{
    Config, ConfigError, Multiplier, Substitution, load_config, validate_config,
};
use crate::expression::{Decimal, Operand, ValidationRules};
use crate::utils::{Range, UtilsError};

fn config(value: serde_json::Value) -> Config {
    serde_json::from_value(value).unwrap_or_else(|e| panic!("invalid test config: {e}"))
}

fn minimal() -> serde_json::Value {
    json!({
        "quiz": { "amount": 2 },
        "variables": [
            { "identifier": "a", "range": [1, 10] },
            { "identifier": "b", "range": [1, 10] }
        ],
        "equations": [{
            "operands": ["+", "-"],
            "variables": { "amount": 2, "combos": [["a", "b"]] }
        }]
    })
}

fn assert_invalid(value: serde_json::Value) {
    let result = validate_config(&config(value));
    assert!(
        matches!(result, Err(ConfigError::Invalid(_))),
        "expected rejection, got {result:?}"
    );
}

#[test]
fn test_defaults_for_optional_fields() {
    let config = config(minimal());
    assert_eq!(config.quiz.amount, 2);
    assert!(config.quiz.equation_order.is_empty());

    let Some(equation) = config.equations.first() else {
        panic!("no equation parsed");
    };
    assert_eq!(
        equation.operands,
        vec![Operand::Addition, Operand::Subtraction]
    );
    assert!(!equation.mutation.enabled);
    assert_eq!(equation.mutation.multiplier, Multiplier::One);
    assert_eq!(equation.validate, ValidationRules::default());
    assert_eq!(equation.solution.range, None);
    assert!(!equation.solution.hide);
    assert_eq!(equation.substitution, Substitution::Literal);
}

#[test]
fn test_full_equation_config() {
    let config = config(json!({
        "quiz": { "amount": 1, "equation-order": [2, 1] },
        "variables": [
            { "identifier": "x", "range": [1, 5] },
            { "identifier": "y", "range": [6, 9] }
        ],
        "equations": [{
            "operands": ["*", "/"],
            "variables": { "amount": 3, "combos": [["x", "y"]] },
            "mutation": {
                "enabled": true,
                "chance": 0.5,
                "multiplier": 0.25,
                "amplifier": [1, 3],
                "affected-variables": ["x"]
            },
            "validate": { "self-division": true, "decimal-solution": true },
            "solution": { "range": [0, 100.5], "hide": true },
            "substitution": "token"
        }]
    }));

    assert_eq!(config.quiz.equation_order, vec![2, 1]);
    let Some(equation) = config.equations.first() else {
        panic!("no equation parsed");
    };
    assert_eq!(equation.mutation.multiplier, Multiplier::Quarter);
    assert_eq!(equation.mutation.amplifier, Range::new(1, 3));
    assert!(equation.mutation.affects("x"));
    assert!(!equation.mutation.affects("y"));
    assert!(equation.validate.self_division);
    assert!(equation.validate.decimal_solution);
    assert!(!equation.validate.negative_results);
    assert_eq!(
        equation.solution.range,
        Some(Range::new(Decimal::ZERO, "100.5".parse().unwrap_or_default()))
    );
    assert!(equation.solution.hide);
    assert_eq!(equation.substitution, Substitution::Token);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_unknown_multiplier_and_operand_are_rejected() {
    let mut value = minimal();
    value["equations"][0]["mutation"] = json!({ "multiplier": 0.3 });
    assert!(serde_json::from_value::<Config>(value).is_err());

    let mut value = minimal();
    value["equations"][0]["operands"] = json!(["^"]);
    assert!(serde_json::from_value::<Config>(value).is_err());
}

#[test]
fn test_minimal_config_is_valid() {
    assert!(validate_config(&config(minimal())).is_ok());
}

#[test]
fn test_rejects_missing_sections() {
    let mut value = minimal();
    value["variables"] = json!([]);
    assert_invalid(value);

    let mut value = minimal();
    value["equations"] = json!([]);
    assert_invalid(value);

    let mut value = minimal();
    value["quiz"]["amount"] = json!(0);
    assert_invalid(value);
}

#[test]
fn test_rejects_bad_variables() {
    let mut value = minimal();
    value["variables"][0]["range"] = json!([10, 1]);
    assert_invalid(value);

    let mut value = minimal();
    value["variables"][0]["identifier"] = json!("a+b");
    let result = validate_config(&config(value));
    assert!(matches!(
        result,
        Err(ConfigError::Identifier(UtilsError::ReservedCharacter { symbol: '+', .. }))
    ));
}

#[test]
fn test_rejects_bad_equations() {
    let mut value = minimal();
    value["equations"][0]["operands"] = json!([]);
    assert_invalid(value);

    let mut value = minimal();
    value["equations"][0]["variables"]["amount"] = json!(1);
    assert_invalid(value);

    let mut value = minimal();
    value["equations"][0]["variables"]["combos"] = json!([]);
    assert_invalid(value);

    let mut value = minimal();
    value["equations"][0]["variables"]["combos"] = json!([["a"], []]);
    assert_invalid(value);

    let mut value = minimal();
    value["equations"][0]["variables"]["combos"] = json!([["a", "c"]]);
    assert_invalid(value);

    let mut value = minimal();
    value["equations"][0]["solution"] = json!({ "range": [10, 0] });
    assert_invalid(value);
}

#[test]
fn test_rejects_bad_mutation() {
    let mutation = |settings: serde_json::Value| {
        let mut value = minimal();
        value["equations"][0]["mutation"] = settings;
        value
    };

    assert_invalid(mutation(json!({
        "enabled": true,
        "chance": 1.5,
        "affected-variables": ["a"]
    })));
    assert_invalid(mutation(json!({
        "enabled": true,
        "chance": 0.5,
        "amplifier": [0, 2],
        "affected-variables": ["a"]
    })));
    assert_invalid(mutation(json!({
        "enabled": true,
        "chance": 0.5,
        "amplifier": [3, 2],
        "affected-variables": ["a"]
    })));
    assert_invalid(mutation(json!({
        "enabled": true,
        "chance": 0.5,
        "affected-variables": ["z"]
    })));

    // settings of a disabled mutation are not checked
    let value = mutation(json!({ "enabled": false, "chance": 1.5 }));
    assert!(validate_config(&config(value)).is_ok());

    // nothing affected is only a warning
    let value = mutation(json!({ "enabled": true, "chance": 0.5 }));
    assert!(validate_config(&config(value)).is_ok());
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config(Path::new("does/not/exist.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("mathquiz-config-{}.json", std::process::id()));
    if let Err(e) = std::fs::write(&path, minimal().to_string()) {
        panic!("cannot write {}: {e}", path.display());
    }

    let loaded = load_config(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.ok(), Some(config(minimal())));
}

#[test]
fn test_load_config_rejects_malformed_json() {
    let path = std::env::temp_dir().join(format!("mathquiz-malformed-{}.json", std::process::id()));
    if let Err(e) = std::fs::write(&path, "{ \"quiz\": ") {
        panic!("cannot write {}: {e}", path.display());
    }

    let loaded = load_config(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(loaded, Err(ConfigError::Json(_))));
}
