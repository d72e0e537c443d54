// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Fuzz target for XML escaping
//!
//! Escaped text must never contain markup characters outside of entities,
//! nor any character XML forbids.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gitatom_feed::escape::{escape_attribute, escape_text, is_xml_char, preformatted_html};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let text = escape_text(input);
        assert!(!text.contains('<') && !text.contains('>') && !text.contains('\r'));
        assert!(text.chars().all(is_xml_char));

        let attribute = escape_attribute(input);
        assert!(!attribute.contains('"') && !attribute.contains('<'));
        assert!(attribute.chars().all(is_xml_char));

        let html = preformatted_html(input);
        assert!(html.starts_with("<pre>") && html.ends_with("</pre>"));
    }
});
