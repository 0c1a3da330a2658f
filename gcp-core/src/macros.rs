pub use serde_json::Value;

// Generate a chart values map, using values!("key1" => value1, "key2" => value2) syntax; the
// values can be anything that converts into a serde_json::Value
#[macro_export]
macro_rules! values {
    () => {
        $crate::charts::Values::new()
    };
    ($($key:expr => $val:expr),+$(,)?) => {
        $crate::charts::Values::from_iter([$(($key.to_string(), $crate::macros::Value::from($val))),+])
    };
}

pub use values;
