/// Builds an [`AkoValue`](crate::AkoValue) from JSON-like syntax.
///
/// Objects become tables (keys keep their written order), arrays become
/// arrays, and any other expression goes through [`to_value`](crate::to_value).
/// Negative numbers and other multi-token expressions need parentheses when
/// nested: `ako!([(-1), 2])`.
///
/// The macro cannot return an error, so an expression that fails
/// [`to_value`](crate::to_value) becomes [`AkoValue::Null`](crate::AkoValue::Null).
/// An `i128` outside the `i64` range is one such case. Call `to_value`
/// directly when the failure matters.
///
/// ```rust
/// use serde_ako::{ako, AkoValue};
///
/// let window = ako!({
///     "title": "Ako",
///     "size": [1280, 720],
///     "fullscreen": false
/// });
/// assert_eq!(window.pointer("size").and_then(AkoValue::as_array).map(Vec::len), Some(2));
/// ```
#[macro_export]
macro_rules! ako {
    (null) => {
        $crate::AkoValue::Null
    };

    (true) => {
        $crate::AkoValue::Bool(true)
    };

    (false) => {
        $crate::AkoValue::Bool(false)
    };

    ([]) => {
        $crate::AkoValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::AkoValue::Array(vec![$($crate::ako!($elem)),*])
    };

    ({}) => {
        $crate::AkoValue::Table($crate::AkoMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::AkoMap::new();
        $(
            table.insert($key.to_string(), $crate::ako!($value));
        )*
        $crate::AkoValue::Table(table)
    }};

    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::AkoValue::Null)
    };
}
