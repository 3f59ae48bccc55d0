//! Purpose: Lock parser contract expectations with corpus + differential coverage.
//! Exports: Integration tests only (no runtime exports).
//! Role: Catch semantic drift between `jsonparser` and the serde_json baseline.
//! Invariants: Differential checks cover escape-free documents where both must agree.
//! Invariants: Deliberate divergences (raw strings, trailing data, trailing commas)
//! are asserted as current contract, not parity.

use jsonparser::api::{ErrorKind, Map, Value, from_str};

fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .expect("finite number"),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), to_serde(value)))
                .collect(),
        ),
    }
}

// serde_json keeps integers as integers; compare everything as f64.
fn normalize(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Number(n) => serde_json::Number::from_f64(n.as_f64().expect("f64"))
            .map(serde_json::Value::Number)
            .expect("finite number"),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(normalize).collect())
        }
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect(),
        ),
        other => other,
    }
}

fn assert_differential_parity(input: &str) {
    let ours = from_str(input).map(|value| to_serde(&value));
    let baseline = serde_json::from_str::<serde_json::Value>(input).map(normalize);
    match (ours, baseline) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "parser value mismatch for {input}"),
        (Err(_), Err(_)) => {}
        (left, right) => panic!("parser outcome mismatch for {input}: ours={left:?}, serde={right:?}"),
    }
}

#[test]
fn corpus_valid_payloads_match_serde() {
    let corpus = [
        r#"{"a":1,"b":"ok"}"#,
        r#"[1,2,3,{"x":true}]"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{"name": "John Doe", "age": 30, "city": "New York", "hobbies": ["reading", "swimming"]}"#,
        "[-0.5, 1e3, 2E-2, 0, -17]",
        " \n\t[ null , false , true ] \r\n",
        r#"{"unicode":"snow ☃ man"}"#,
        "{}",
        "[]",
        "[[], {}, [[]]]",
    ];

    for case in corpus {
        assert_differential_parity(case);
    }
}

#[test]
fn corpus_malformed_payloads_rejected_by_both() {
    let corpus = [
        "",
        "{",
        r#"{"a":1"#,
        r#"{"a" 1}"#,
        "[1 2]",
        r#""abc"#,
        "tru",
        "nul",
        "-",
        "1.2.3",
        "1e400",
        "{1:2}",
        "@",
    ];

    for case in corpus {
        assert!(from_str(case).is_err(), "expected rejection for {case}");
        assert!(
            serde_json::from_str::<serde_json::Value>(case).is_err(),
            "serde_json baseline unexpectedly accepted {case}"
        );
    }
}

#[test]
fn corpus_duplicate_keys_matches_last_write_wins() {
    let input = r#"{"a":1,"a":2}"#;
    assert_differential_parity(input);

    let value = from_str(input).expect("parse");
    assert_eq!(value.get("a"), Some(&Value::Number(2.0)));
    assert_eq!(value.as_object().map(Map::len), Some(1));
}

#[test]
fn escaped_strings_stay_raw() {
    let value = from_str(r#"["a\"b", "☃", "line\nbreak"]"#).expect("parse");
    let items = value.as_array().expect("array");
    assert_eq!(items[0].as_str(), Some(r#"a\"b"#));
    assert_eq!(items[1].as_str(), Some(r"☃"));
    assert_eq!(items[2].as_str(), Some(r"line\nbreak"));

    let decoded: serde_json::Value = serde_json::from_str(r#""a\"b""#).expect("baseline");
    assert_ne!(items[0].as_str(), decoded.as_str());
}

#[test]
fn trailing_data_is_ignored() {
    let value = from_str(r#""x" trailing"#).expect("parse");
    assert_eq!(value.as_str(), Some("x"));
    assert!(serde_json::from_str::<serde_json::Value>(r#""x" trailing"#).is_err());
}

#[test]
fn trailing_commas_are_tolerated() {
    assert_eq!(
        from_str("[1,]").expect("array"),
        Value::Array(vec![Value::Number(1.0)])
    );
    assert!(from_str(r#"{"a":1,}"#).is_ok());
    assert_eq!(
        from_str("[,]").unwrap_err().kind(),
        ErrorKind::UnexpectedCharacter
    );
}

#[test]
fn corpus_deep_nesting_parses_without_limit() {
    let depth = 1_000usize;
    let mut payload = String::with_capacity(depth * 2 + 1);
    for _ in 0..depth {
        payload.push('[');
    }
    payload.push('0');
    for _ in 0..depth {
        payload.push(']');
    }
    assert!(
        from_str(&payload).is_ok(),
        "deep nesting unexpectedly rejected without a depth limit"
    );

    let parsed = std::thread::spawn(move || from_str(&payload).is_ok())
        .join()
        .expect("join");
    assert!(parsed, "deep nesting rejected on a default-stack thread");
}

#[test]
fn corpus_deep_object_nesting_parses_without_limit() {
    let depth = 1_000usize;
    let payload = format!("{}null{}", r#"{"a": "#.repeat(depth), "}".repeat(depth));
    assert!(from_str(&payload).is_ok());
}

#[test]
fn independent_parsers_run_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|idx| {
            std::thread::spawn(move || {
                let text = format!(r#"{{"id": {idx}, "tags": ["t{idx}"]}}"#);
                from_str(&text).expect("parse")
            })
        })
        .collect();

    for (idx, handle) in handles.into_iter().enumerate() {
        let value = handle.join().expect("thread");
        assert_eq!(value.get("id").and_then(Value::as_f64), Some(idx as f64));
    }
}
