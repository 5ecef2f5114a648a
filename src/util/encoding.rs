//! URL component and data URI encoding.

#[cfg(test)]
#[path = "encoding_test.rs"]
mod encoding_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` the way `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Turn inline SVG markup into a data URI; URLs and existing data URIs pass through.
pub fn to_data_uri(image: &str) -> String {
    let trimmed = image.trim_start();
    if trimmed.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("<svg")) {
        format!("data:image/svg+xml,{}", encode_uri_component(trimmed))
    } else {
        image.to_owned()
    }
}
