//! Parsing JSON with a fallible parser wrapped as an `Outcome`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::arithmetic_side_effects)]

use std::cell::Cell;

use funky::{Outcome, Result, Value, is_array_of, is_object, is_string};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const GOOD_JSON: &str = r#"{"function": "sayHello", "arguments": [ "world" ]}"#;
const BAD_JSON: &str = r#"{name: "completed", "type": boolean}"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct JsonFunction {
    function: String,
    arguments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct JsonProperty {
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

fn parse_json_as<T: DeserializeOwned>(text: &str) -> Outcome<T, String> {
    Outcome::from(serde_json::from_str(text)).map_err(|e: serde_json::Error| e.to_string())
}

#[test]
fn test_parse_good_json() -> Result<()> {
    let parsed = parse_json_as::<JsonFunction>(GOOD_JSON);

    assert!(parsed.is_ok());
    assert!(!parsed.is_err());

    let function = parsed
        .as_ref()
        .match_with(|value| value.function.clone(), |_| String::new());
    assert_eq!(function, "sayHello");

    let mut first_argument = None;
    parsed.match_ok(|value| first_argument = value.arguments.first().cloned());
    assert_eq!(first_argument.as_deref(), Some("world"));

    let failures = Cell::new(0);
    parsed.match_err(|_| failures.set(failures.get() + 1));
    assert_eq!(failures.get(), 0);

    assert_eq!(parsed.clone().unwrap()?.function, "sayHello");
    assert!(parsed.clone().unwrap_err().is_err_and(|e| e.is_illegal_state()));

    let default = JsonFunction {
        function: "default".to_string(),
        arguments: Vec::new(),
    };
    assert_eq!(parsed.unwrap_or(default).function, "sayHello");
    Ok(())
}

#[test]
fn test_parse_bad_json() -> Result<()> {
    let parsed = parse_json_as::<JsonProperty>(BAD_JSON);

    assert!(parsed.is_err());
    assert!(!parsed.is_ok());

    let message = parsed.as_ref().match_with(|_| String::new(), String::clone);
    assert!(message.starts_with("key must be a string"), "{message}");

    let successes = Cell::new(0);
    parsed.match_ok(|_| successes.set(successes.get() + 1));
    assert_eq!(successes.get(), 0);

    let mut seen = String::new();
    parsed.match_err(|error| seen.clone_from(error));
    assert_eq!(seen, message);

    assert!(parsed.clone().unwrap().is_err_and(|e| e.is_illegal_state()));
    assert_eq!(parsed.clone().unwrap_err()?, message);

    let default = JsonProperty {
        name: "default".to_string(),
        kind: "undefined".to_string(),
    };
    assert_eq!(parsed.unwrap_or(default).name, "default");
    Ok(())
}

#[test]
fn test_parse_untyped_json_into_values() {
    let parsed = parse_json_as::<Value>(GOOD_JSON);

    let well_formed = parsed.as_ref().match_with(
        |value| {
            is_object(value)
                && value
                    .get("arguments")
                    .is_some_and(|args| is_array_of(args, is_string))
        },
        |_| false,
    );
    assert!(well_formed);
}

#[test]
fn test_recover_from_bad_json_with_or_else() {
    let recovered = parse_json_as::<JsonProperty>(BAD_JSON).or_else(|_| {
        parse_json_as::<JsonProperty>(r#"{"name": "completed", "type": "boolean"}"#)
    });
    let kind = recovered
        .map(|property| property.kind)
        .unwrap_or_else(|_| String::new());
    assert_eq!(kind, "boolean");
}
