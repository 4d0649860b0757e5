use serde_ako::{ako, serialize, AkoMap, AkoOptions, AkoValue, Number};

#[test]
fn test_ako_macro_null() {
    assert_eq!(ako!(null), AkoValue::Null);
}

#[test]
fn test_ako_macro_booleans() {
    assert_eq!(ako!(true), AkoValue::Bool(true));
    assert_eq!(ako!(false), AkoValue::Bool(false));
}

#[test]
fn test_ako_macro_numbers() {
    assert_eq!(ako!(42), AkoValue::Number(Number::Integer(42)));
    assert_eq!(ako!(3.5), AkoValue::Number(Number::Float(3.5)));
    assert_eq!(ako!(-123), AkoValue::Number(Number::Integer(-123)));
}

#[test]
fn test_ako_macro_strings() {
    assert_eq!(ako!("hello world"), AkoValue::String("hello world".to_string()));
    assert_eq!(ako!(""), AkoValue::String(String::new()));
}

#[test]
fn test_ako_macro_expressions() {
    let level = 39;
    assert_eq!(ako!(level), AkoValue::from(39));
    assert_eq!(ako!([level, (level + 1)]), ako!([39, 40]));
    assert_eq!(ako!((Some("miku"))), AkoValue::from("miku"));
    assert_eq!(ako!((None::<u8>)), AkoValue::Null);
}

#[test]
fn test_ako_macro_arrays() {
    assert_eq!(ako!([]), AkoValue::Array(vec![]));

    assert_eq!(
        ako!([1, "hello", true, null]),
        AkoValue::Array(vec![
            AkoValue::Number(Number::Integer(1)),
            AkoValue::String("hello".to_string()),
            AkoValue::Bool(true),
            AkoValue::Null,
        ])
    );
}

#[test]
fn test_ako_macro_arrays_are_not_vectors() {
    // Cross notation is a serialization choice; the value stays an array.
    let pair = ako!([1280, 720]);
    assert!(pair.is_array());
    assert!(!pair.is_vector());
    assert_eq!(serialize(&pair, &AkoOptions::compact()), "1280x720");
}

#[test]
fn test_ako_macro_tables() {
    assert_eq!(ako!({}), AkoValue::Table(AkoMap::new()));

    let simple = ako!({
        "name": "Alice",
        "age": 30,
    });

    let table = simple.as_table().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("name"), Some(&AkoValue::String("Alice".to_string())));
    assert_eq!(table.get("age"), Some(&AkoValue::Number(Number::Integer(30))));
}

#[test]
fn test_ako_macro_nested() {
    let nested = ako!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    assert_eq!(nested.as_table().map(AkoMap::len), Some(3));
    assert_eq!(nested.pointer("user.id"), Some(&AkoValue::from(123)));
    assert_eq!(nested.pointer("user.name").and_then(AkoValue::as_str), Some("Bob"));
    assert_eq!(nested.pointer("user.active"), Some(&AkoValue::Bool(true)));

    let tags = nested.pointer("tags").and_then(AkoValue::as_array).unwrap();
    assert_eq!(tags, &vec![AkoValue::from("admin"), AkoValue::from("developer")]);

    assert_eq!(
        serialize(&nested, &AkoOptions::compact()),
        "user [ id 123 name \"Bob\" +active ] tags [[ \"admin\" \"developer\" ]] count 42 "
    );
}

#[test]
fn test_ako_value_methods() {
    let null_val = ako!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_table());
    assert!(!null_val.is_vector());

    let bool_val = ako!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let num_val = ako!(2.0);
    assert_eq!(num_val.as_i64(), Some(2));
    assert_eq!(num_val.as_f64(), Some(2.0));

    let str_val = ako!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = ako!([1, 2, 3]);
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));

    let table_val = ako!({"key": "value"});
    assert_eq!(table_val.as_table().map(AkoMap::len), Some(1));
}
