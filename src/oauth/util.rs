use crate::oauth::consts::PARAM_ENCODE_SET;

use percent_encoding::percent_encode;

/// Percent-encode `s` following OAuth parameter escaping rules: unreserved
/// characters pass through, every other byte of the UTF-8 form is rendered
/// as `%` plus two uppercase hex digits.
pub fn encode(s: &str) -> String {
  percent_encode(s.as_bytes(), PARAM_ENCODE_SET).collect()
}

/// Serialize parameters as `key=value` pairs joined by `&`, both sides
/// percent-encoded.
pub fn build_query(params: &[(&str, &str)]) -> String {
  params
    .iter()
    .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
    .collect::<Vec<String>>()
    .join("&")
}
