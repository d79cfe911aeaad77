use heapless::String as HeaplessString;
use std::str::FromStr;

/// Copies `value` into a bounded string, failing when it exceeds `N` bytes.
pub fn to_heapless<const N: usize>(value: &str, field: &str) -> Result<HeaplessString<N>, String> {
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for '{field}' is too long (max {N} chars)"))
}

pub fn to_optional_heapless<const N: usize>(
    value: Option<&str>,
    field: &str,
) -> Result<Option<HeaplessString<N>>, String> {
    value.map(|v| to_heapless::<N>(v, field)).transpose()
}
