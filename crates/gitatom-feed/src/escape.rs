// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! XML escaping
//!
//! All text placed in the document goes through one of these functions, so
//! no entry-supplied value can open or close an element. Characters XML 1.0
//! does not allow at all (most C0 controls, U+FFFE, U+FFFF) are replaced
//! with [`REPLACEMENT_CHARACTER`].

use std::borrow::Cow;

/// Stand-in for characters that cannot appear in an XML document
pub const REPLACEMENT_CHARACTER: char = '\u{fffd}';

/// Whether `c` may appear in an XML 1.0 document, escaped or not
#[must_use]
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

/// Escape `&`, `<` and `>` for use as element text
#[must_use]
pub fn escape_text(value: &str) -> Cow<'_, str> {
    escape(value, false)
}

/// Escape `&`, `<`, `>` and `"` for use inside a double-quoted attribute
///
/// Tabs and line feeds become character references so that attribute value
/// normalization keeps them.
#[must_use]
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

/// Wrap plain text in a `<pre>` block, escaped as HTML
#[must_use]
pub fn preformatted_html(text: &str) -> String {
    format!("<pre>{}</pre>", escape_text(text))
}

fn needs_escape(c: char, attribute: bool) -> bool {
    matches!(c, '&' | '<' | '>' | '\r')
        || (attribute && matches!(c, '"' | '\t' | '\n'))
        || !is_xml_char(c)
}

fn escape(value: &str, attribute: bool) -> Cow<'_, str> {
    if !value.chars().any(|c| needs_escape(c, attribute)) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            // XML parsers fold a bare CR into LF
            '\r' => escaped.push_str("&#13;"),
            '"' if attribute => escaped.push_str("&quot;"),
            '\t' if attribute => escaped.push_str("&#9;"),
            '\n' if attribute => escaped.push_str("&#10;"),
            c if !is_xml_char(c) => escaped.push(REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
