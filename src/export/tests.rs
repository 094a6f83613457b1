use pretty_assertions::assert_eq;
use serde_json::json;

use crate::export::{ExportFormat, render, render_json, render_text};
use crate::expression::Decimal;
use crate::generator::{Equation, Quiz, Variable};

fn quizzes() -> Vec<Quiz> {
    let variable = |identifier: &str, value: i64| Variable {
        identifier: identifier.to_string(),
        value: Decimal::from(value),
    };
    let equation = |identifiers: &str, values: &str| Equation {
        identifiers: identifiers.to_string(),
        values: values.to_string(),
    };

    vec![
        Quiz {
            variables: vec![variable("a", 5), variable("b", 3)],
            equations: vec![equation("a-b=2", "5-3=2"), equation("a*b=?", "5*3=?")],
        },
        Quiz {
            variables: vec![variable("a", 4), variable("b", 8)],
            equations: vec![equation("b/a=2", "8/4=2")],
        },
    ]
}

fn rendered(format: ExportFormat) -> String {
    let mut out = Vec::new();
    if let Err(e) = render(format, &quizzes(), &mut out) {
        panic!("rendering failed: {e}");
    }
    String::from_utf8(out).unwrap_or_else(|e| panic!("output is not UTF-8: {e}"))
}

#[test]
fn test_render_text() {
    let expected = "\
Quiz 1
a = 5, b = 3
a-b=2
5-3=2
a*b=?
5*3=?

Quiz 2
a = 4, b = 8
b/a=2
8/4=2
";
    assert_eq!(rendered(ExportFormat::Text), expected);
}

#[test]
fn test_render_json() {
    let output = rendered(ExportFormat::Json);
    let parsed: serde_json::Value =
        serde_json::from_str(&output).unwrap_or_else(|e| panic!("invalid JSON: {e}"));

    assert_eq!(
        parsed,
        json!([
            {
                "variables": [
                    { "identifier": "a", "value": "5" },
                    { "identifier": "b", "value": "3" }
                ],
                "equations": [
                    { "identifiers": "a-b=2", "values": "5-3=2" },
                    { "identifiers": "a*b=?", "values": "5*3=?" }
                ]
            },
            {
                "variables": [
                    { "identifier": "a", "value": "4" },
                    { "identifier": "b", "value": "8" }
                ],
                "equations": [
                    { "identifiers": "b/a=2", "values": "8/4=2" }
                ]
            }
        ])
    );
}

#[test]
fn test_render_nothing() {
    let mut text = Vec::new();
    assert!(render_text(&[], &mut text).is_ok());
    assert!(text.is_empty());

    let mut json = Vec::new();
    assert!(render_json(&[], &mut json).is_ok());
    assert_eq!(String::from_utf8_lossy(&json), "[]\n");
}
