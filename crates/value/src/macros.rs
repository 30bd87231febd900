//! Record literal macro.

/// Builds a [`Data`](crate::Data) record from `key => value` pairs.
///
/// Keys convert with `Into<FieldKey>`, values with `Into<Value>`.
///
/// ```rust
/// use sift_value::{Value, data};
///
/// let record = data! { "a" => " 1", "b" => 2, "c" => Value::Null };
/// assert_eq!(record.len(), 3);
/// assert!(data!().is_empty());
/// ```
#[macro_export]
macro_rules! data {
    () => {
        $crate::Data::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Data::new();
        $( record.insert($key, $value); )+
        record
    }};
}
