/// Builds a [`Value`](crate::Value) from literal syntax.
///
/// Arrays produce list-shaped containers. Object keys may be string or
/// integer literals and keep their written order.
///
/// ```rust
/// use ggon::{encode, ggon};
///
/// let value = ggon!({
///     "name": "Heavy",
///     "weapons": ["minigun", "shotgun"],
///     0: "first"
/// });
/// assert_eq!(encode(&value).unwrap(), "{name:Heavy,weapons:[minigun,shotgun],0:first}");
/// ```
#[macro_export]
macro_rules! ggon {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Container($crate::GgonMap::from_list(::std::vec::Vec::new()))
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Container($crate::GgonMap::from_list(vec![$($crate::ggon!($elem)),*]))
    };

    ({}) => {
        $crate::Value::Container($crate::GgonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::GgonMap::new();
        $(
            map.insert($key, $crate::ggon!($value));
        )*
        $crate::Value::Container(map)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
