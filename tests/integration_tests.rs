use ggon::{
    encode, encode_with_options, ggon, to_string, to_string_with_options, to_value,
    EncodeOptions, Error, GgonMap, Key, Value,
};
use serde::Serialize;
use std::collections::BTreeMap;

fn container(entries: Vec<(Key, Value)>) -> Value {
    Value::Container(entries.into_iter().collect())
}

#[test]
fn test_simple_strings_verbatim() {
    for s in ["a", "Z", "0", "_", ".", "+", "-", "player_1", "v2.3.0+build-7"] {
        assert_eq!(encode(&Value::from(s)).unwrap(), s);
    }
}

#[test]
fn test_empty_string_quoted() {
    assert_eq!(encode(&Value::from("")).unwrap(), "''");
}

#[test]
fn test_quoted_string_escapes() {
    let value = Value::from("it's a \\ path\nwith\rall\tthe\0specials");
    assert_eq!(
        encode(&value).unwrap(),
        r"'it\'s a \\ path\nwith\rall\tthe\0specials'"
    );
}

#[test]
fn test_list_in_length_first_order() {
    let value = container(vec![
        (Key::from("length"), Value::from("2")),
        (Key::Int(0), Value::from("x")),
        (Key::Int(1), Value::from("y")),
    ]);
    assert_eq!(encode(&value).unwrap(), "[x,y]");
}

#[test]
fn test_list_with_length_last() {
    let value = container(vec![
        (Key::Int(1), Value::from("y")),
        (Key::Int(0), Value::from("x")),
        (Key::from("length"), Value::from("2")),
    ]);
    // Elements are written by index, not insertion order.
    assert_eq!(encode(&value).unwrap(), "[x,y]");
}

#[test]
fn test_missing_index_falls_back_to_map() {
    let value = container(vec![
        (Key::from("length"), Value::from("2")),
        (Key::Int(0), Value::from("x")),
    ]);
    assert_eq!(encode(&value).unwrap(), "{length:2,0:x}");
}

#[test]
fn test_non_digit_length_falls_back_to_map() {
    let value = container(vec![
        (Key::from("length"), Value::from("abc")),
        (Key::Int(0), Value::from("x")),
    ]);
    assert_eq!(encode(&value).unwrap(), "{length:abc,0:x}");
}

#[test]
fn test_empty_length_is_empty_list() {
    let value = container(vec![(Key::from("length"), Value::from(""))]);
    assert_eq!(encode(&value).unwrap(), "[]");
}

#[test]
fn test_string_index_keys_are_not_list_indices() {
    let value = container(vec![
        (Key::from("length"), Value::from("1")),
        (Key::from("0"), Value::from("x")),
    ]);
    assert_eq!(encode(&value).unwrap(), "{length:1,0:x}");
}

#[test]
fn test_record_with_length_field_becomes_list() {
    // A record that happens to fit the list shape is written as a list.
    let value = ggon!({ "length": "0" });
    assert_eq!(encode(&value).unwrap(), "[]");
}

#[test]
fn test_numeric_length_value_classifies_list() {
    let value = container(vec![
        (Key::from("length"), Value::from(1)),
        (Key::Int(0), Value::from("x")),
    ]);
    assert_eq!(encode(&value).unwrap(), "[x]");
}

#[test]
fn test_numeric_length_written_in_map_form_needs_coercion() {
    let value = container(vec![
        (Key::from("length"), Value::from(3)),
        (Key::Int(0), Value::from("x")),
    ]);
    assert_eq!(encode(&value), Err(Error::unencodable_type("integer")));
    assert_eq!(
        encode_with_options(&value, EncodeOptions::coerced()).unwrap(),
        "{length:3,0:x}"
    );
}

#[test]
fn test_empty_map() {
    assert_eq!(encode(&Value::from(GgonMap::new())).unwrap(), "{}");
}

#[test]
#[allow(clippy::approx_constant)]
fn test_numbers() {
    let coerced = EncodeOptions::coerced();
    assert_eq!(encode_with_options(&Value::from(42), coerced.clone()).unwrap(), "42");
    assert_eq!(encode_with_options(&Value::from(-42), coerced.clone()).unwrap(), "-42");
    assert_eq!(encode_with_options(&Value::from(3.14), coerced.clone()).unwrap(), "3.14");
    assert_eq!(encode_with_options(&Value::from(2.0), coerced).unwrap(), "2");

    assert!(matches!(
        encode(&Value::from(42)),
        Err(Error::UnencodableType { .. })
    ));
}

#[test]
fn test_float_text_rounding_and_exponents() {
    let value = ggon!({
        "sum": (0.1 + 0.2),
        "big": 1e20,
        "tiny": 1e-7,
        "inf": (f64::INFINITY),
        "nan": (f64::NAN)
    });
    assert_eq!(
        encode_with_options(&value, EncodeOptions::coerced()).unwrap(),
        "{sum:0.3,big:1.0E+20,tiny:1.0E-7,inf:INF,nan:NAN}"
    );
}

#[test]
fn test_unencodable_kinds() {
    assert_eq!(encode(&Value::Null), Err(Error::unencodable_type("NULL")));
    assert_eq!(
        encode_with_options(&Value::Bool(true), EncodeOptions::coerced()),
        Err(Error::unencodable_type("boolean"))
    );
    assert_eq!(encode(&Value::from(1.5)), Err(Error::unencodable_type("double")));
    assert_eq!(
        encode(&Value::from(1.5)).unwrap_err().to_string(),
        "Cannot encode value of type double"
    );
}

#[test]
fn test_first_failure_in_depth_first_order() {
    let value = ggon!({
        "ok": "fine",
        "nested": [true],
        "later": null
    });
    assert_eq!(encode(&value), Err(Error::unencodable_type("boolean")));
}

#[test]
fn test_coercion_propagates_to_nested_values() {
    let value = ggon!({ "scores": [10, 2.5] });
    assert_eq!(
        encode_with_options(&value, EncodeOptions::coerced()).unwrap(),
        "{scores:[10,2.5]}"
    );
    assert!(encode(&value).is_err());
}

#[test]
fn test_integer_keys_coerced_without_flag() {
    let value = ggon!({ 3: "three", "4": "four" });
    assert_eq!(encode(&value).unwrap(), "{3:three,4:four}");
}

#[test]
fn test_non_simple_keys_quoted() {
    let value = ggon!({ "": "empty", "two words": "x" });
    assert_eq!(encode(&value).unwrap(), "{'':empty,'two words':x}");
}

#[test]
fn test_nested_empty_list() {
    let inner = container(vec![(Key::from("length"), Value::from(""))]);
    let value = container(vec![
        (Key::from("length"), Value::from("1")),
        (Key::Int(0), inner),
    ]);
    assert_eq!(encode(&value).unwrap(), "[[]]");
}

#[test]
fn test_deep_nesting() {
    let value = ggon!({
        "server": {
            "name": "Gang Garrison",
            "maps": ["ctf_truefort", "cp_dirtbowl"],
            "admins": []
        }
    });
    assert_eq!(
        encode(&value).unwrap(),
        "{server:{name:'Gang Garrison',maps:[ctf_truefort,cp_dirtbowl],admins:[]}}"
    );
}

#[test]
fn test_removal_preserves_order() {
    let mut map = GgonMap::new();
    for key in ["a", "b", "c", "d"] {
        map.insert(key, Value::from(key));
    }
    map.remove("b");
    assert_eq!(encode(&Value::from(map)).unwrap(), "{a:a,c:c,d:d}");
}

#[test]
fn test_encoding_is_deterministic() {
    let value = ggon!({ "z": "1", "a": ["x", "y z"], "m": {} });
    let first = encode(&value).unwrap();
    for _ in 0..10 {
        assert_eq!(encode(&value).unwrap(), first);
    }
}

#[test]
fn test_depth_limit() {
    let value = ggon!([[["deep"]]]);
    assert_eq!(
        encode_with_options(&value, EncodeOptions::new().with_max_depth(3)).unwrap(),
        "[[[deep]]]"
    );
    assert_eq!(
        encode_with_options(&value, EncodeOptions::new().with_max_depth(2)),
        Err(Error::DepthExceeded { max_depth: 2 })
    );
}

#[derive(Serialize)]
struct Loadout {
    class: String,
    primary: String,
    secondary: Option<String>,
}

#[derive(Serialize)]
struct Profile {
    name: String,
    level: u32,
    loadouts: Vec<Loadout>,
    stats: BTreeMap<String, f64>,
}

#[test]
fn test_serde_struct_roundtrip_to_text() {
    let mut stats = BTreeMap::new();
    stats.insert("accuracy".to_string(), 0.25);
    stats.insert("kdr".to_string(), 1.5);

    let profile = Profile {
        name: "Engineer Main".to_string(),
        level: 30,
        loadouts: vec![Loadout {
            class: "engineer".to_string(),
            primary: "shotgun".to_string(),
            secondary: Some("wrench".to_string()),
        }],
        stats,
    };

    assert_eq!(
        to_string_with_options(&profile, EncodeOptions::coerced()).unwrap(),
        "{name:'Engineer Main',level:30,loadouts:[{class:engineer,primary:shotgun,secondary:wrench}],stats:{accuracy:0.25,kdr:1.5}}"
    );
}

#[test]
fn test_serde_none_is_unencodable() {
    let loadout = Loadout {
        class: "spy".to_string(),
        primary: "revolver".to_string(),
        secondary: None,
    };
    assert_eq!(to_string(&loadout), Err(Error::unencodable_type("NULL")));
}

#[test]
fn test_serde_json_value() {
    let json = serde_json::json!({
        "title": "Save",
        "slots": ["one", "two"],
        "empty": []
    });
    assert_eq!(
        to_string(&json).unwrap(),
        "{title:Save,slots:[one,two],empty:[]}"
    );
}

#[test]
fn test_value_serializes_back_to_json() {
    let value = to_value(&vec!["a", "b"]).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"["a","b"]"#);

    let map = ggon!({ "length": "x" });
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"length":"x"}"#);
}
