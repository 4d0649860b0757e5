use serde::{Deserialize, Serialize};
use serde_ako::{
    from_reader, from_slice, from_str, from_value, to_string, to_string_pretty,
    to_string_with_options, to_value, to_writer, to_writer_with_options, AkoOptions, AkoValue,
    Number,
};
use std::collections::BTreeMap;
use std::io::Cursor;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Transform {
    position: [f64; 3],
    rotation: (f32, f32, f32, f32),
    scale: Vec<f64>,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

#[test]
fn test_simple_struct() {
    let ako = to_string(&alice()).unwrap();
    println!("User Ako: {}", ako);

    let user_back: User = from_str(&ako).unwrap();
    assert_eq!(alice(), user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: alice(),
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.5,
                quantity: 1,
            },
        ],
        total: 109.48,
    };

    let ako = to_string_pretty(&order).unwrap();
    println!("Order Ako:\n{}", ako);

    let order_back: Order = from_str(&ako).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_nested_struct_indentation() {
    #[derive(Serialize)]
    struct Outer {
        inner: Inner,
    }
    #[derive(Serialize)]
    struct Inner {
        level: u8,
        flags: Vec<bool>,
    }

    let outer = Outer {
        inner: Inner {
            level: 39,
            flags: vec![true, false],
        },
    };
    let options = AkoOptions::new().with_spaces();
    assert_eq!(
        to_string_with_options(&outer, options).unwrap(),
        "inner [\n    level 39\n    flags [[\n        +\n        -\n    ]]\n]\n"
    );
}

#[test]
fn test_vector_fields() {
    let transform = Transform {
        position: [1.0, 2.5, 3.0],
        rotation: (0.0, 0.0, 0.0, 1.0),
        scale: vec![1.0, 1.0],
    };

    let ako = to_string_with_options(&transform, AkoOptions::compact()).unwrap();
    assert_eq!(
        ako,
        "position 1.0x2.5x3.0 rotation 0.0x0.0x0.0x1.0 scale 1.0x1.0 "
    );

    let back: Transform = from_str(&ako).unwrap();
    assert_eq!(transform, back);
}

#[test]
fn test_long_numeric_vec_stays_array() {
    let values = vec![1u32, 2, 3, 4, 5];
    let ako = to_string_with_options(&values, AkoOptions::compact()).unwrap();
    assert_eq!(ako, "[[ 1 2 3 4 5 ]]");

    let back: Vec<u32> = from_str(&ako).unwrap();
    assert_eq!(values, back);
}

#[test]
fn test_options_and_unit() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Settings {
        nickname: Option<String>,
        avatar: Option<String>,
        marker: (),
    }

    let settings = Settings {
        nickname: Some("miku".to_string()),
        avatar: None,
        marker: (),
    };

    let ako = to_string_with_options(&settings, AkoOptions::compact()).unwrap();
    assert_eq!(ako, "nickname \"miku\" ;avatar ;marker ");

    let back: Settings = from_str(&ako).unwrap();
    assert_eq!(settings, back);
}

#[test]
fn test_enum_round_trip() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Shape {
        Empty,
        Circle(f64),
        Rect { width: u32, height: u32 },
        Segment(u32, u32, u32),
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Scene {
        shapes: Vec<Shape>,
    }

    let scene = Scene {
        shapes: vec![
            Shape::Empty,
            Shape::Circle(2.5),
            Shape::Rect {
                width: 3,
                height: 4,
            },
            Shape::Segment(1, 2, 3),
        ],
    };

    let ako = to_string_with_options(&scene, AkoOptions::compact()).unwrap();
    assert_eq!(
        ako,
        "shapes [[ \"Empty\" [ Circle 2.5 ] [ Rect [ width 3 height 4 ] ] [ Segment 1x2x3 ] ]] "
    );

    let back: Scene = from_str(&ako).unwrap();
    assert_eq!(scene, back);
}

#[test]
fn test_special_strings_round_trip() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Text {
        quoted: String,
        backslash: String,
        multiline: String,
        empty: String,
        unicode: String,
    }

    let text = Text {
        quoted: "1 \"2\" 3".to_string(),
        backslash: "C:\\ako".to_string(),
        multiline: "Some\nBody".to_string(),
        empty: String::new(),
        unicode: "初音ミク".to_string(),
    };

    let ako = to_string(&text).unwrap();
    let back: Text = from_str(&ako).unwrap();
    assert_eq!(text, back);
}

#[test]
fn test_map_keys_are_quoted_when_needed() {
    let mut map = BTreeMap::new();
    map.insert("plain".to_string(), 1);
    map.insert("with space".to_string(), 2);
    map.insert("x".to_string(), 3);
    map.insert("9lives".to_string(), 4);

    let ako = to_string_with_options(&map, AkoOptions::compact()).unwrap();
    assert_eq!(ako, "\"9lives\" 4 plain 1 \"with space\" 2 \"x\" 3 ");

    let back: BTreeMap<String, i32> = from_str(&ako).unwrap();
    assert_eq!(map, back);
}

#[test]
fn test_to_value() {
    let value = to_value(&alice()).unwrap();

    match value {
        AkoValue::Table(table) => {
            assert_eq!(table.get("id"), Some(&AkoValue::Number(Number::Integer(123))));
            assert_eq!(table.get("active"), Some(&AkoValue::Bool(true)));
            assert_eq!(
                table.get("tags").and_then(AkoValue::as_array).map(Vec::len),
                Some(2)
            );
        }
        _ => panic!("Expected table"),
    }
}

#[test]
fn test_from_value() {
    let value = to_value(&alice()).unwrap();
    let user: User = from_value(value).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn test_from_value_accepts_vectors_as_sequences() {
    let doc = serde_ako::parse("size 1280x720").unwrap();
    let size = doc.pointer("size").cloned().unwrap();
    assert!(size.is_vector());

    let pair: (u32, u32) = from_value(size.clone()).unwrap();
    assert_eq!(pair, (1280, 720));
    let list: Vec<u32> = from_value(size).unwrap();
    assert_eq!(list, vec![1280, 720]);
}

#[test]
fn test_writer_and_reader() {
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &alice()).unwrap();
    let user: User = from_reader(Cursor::new(buffer)).unwrap();
    assert_eq!(user, alice());

    let mut buffer = Vec::new();
    to_writer_with_options(&mut buffer, &alice(), AkoOptions::compact()).unwrap();
    assert!(!buffer.contains(&b'\n'));
    let user: User = from_slice(&buffer).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn test_ako_value_round_trips_through_serde() {
    let value = serde_ako::parse("a 1 b [ c \"d\" ] +e").unwrap();
    let text = to_string(&value).unwrap();
    let back: AkoValue = from_str(&text).unwrap();
    assert_eq!(value, back);
}

#[test]
fn test_interop_with_json() {
    let json = r#"{"name":"Miku","level":39,"tags":["a","b","c","d","e"],"ok":true}"#;
    let from_json: serde_json::Value = serde_json::from_str(json).unwrap();

    let ako = to_string(&from_json).unwrap();
    let back: serde_json::Value = from_str(&ako).unwrap();
    assert_eq!(from_json, back);
}

#[test]
fn test_errors() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Strict {
        count: u32,
    }

    let err = from_str::<Strict>("count \"three\"").unwrap_err();
    assert!(!err.is_lex() && !err.is_parse());

    let err = from_str::<Strict>("count 3 !").unwrap_err();
    assert!(err.is_lex());
    assert_eq!(err.to_string(), "Unexpected character '!' at 1:9");

    let err = from_str::<Strict>("count [ a 1").unwrap_err();
    assert!(err.is_parse());

    assert!(from_str::<Strict>("").is_err());
}
