// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Integration tests for gitatom-feed
//!
//! These tests drive the public API with a source whose values come from
//! proptest, parse the output with an XML parser, and check that every
//! field survives serialization.

use gitatom_feed::escape::{REPLACEMENT_CHARACTER, is_xml_char};
use gitatom_feed::{FeedBuilder, FeedError, FeedSource, FixedTimestamp};
use proptest::prelude::*;
use similar_asserts::assert_eq;

#[derive(Debug, Clone)]
struct Note {
    slug: String,
    title: String,
    author: String,
    body: String,
    updated: FixedTimestamp,
}

struct Notebook {
    notes: Vec<Note>,
    updated: Option<FixedTimestamp>,
}

impl FeedSource for Notebook {
    type Entry = Note;
    type Error = FeedError;

    fn entries(&self) -> Result<Vec<Note>, FeedError> {
        Ok(self.notes.clone())
    }

    fn feed_title(&self) -> String {
        "Notebook".to_string()
    }

    fn feed_link(&self) -> Option<String> {
        Some("https://notes.example.com/".to_string())
    }

    fn feed_updated(&self) -> Option<FixedTimestamp> {
        self.updated
    }

    fn entry_title(&self, entry: &Note) -> String {
        entry.title.clone()
    }

    fn entry_updated(&self, entry: &Note) -> FixedTimestamp {
        entry.updated
    }

    fn entry_link(&self, entry: &Note) -> Option<String> {
        Some(format!("https://notes.example.com/{}?v=\"1\"&x=<y>", entry.slug))
    }

    fn entry_author(&self, entry: &Note) -> Option<String> {
        Some(entry.author.clone())
    }

    fn entry_text_content(&self, entry: &Note) -> Result<Option<String>, FeedError> {
        Ok(Some(entry.body.clone()))
    }
}

/// `value` as an XML parser reads it back after escaping
fn xml_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| if is_xml_char(c) { c } else { REPLACEMENT_CHARACTER })
        .collect()
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> String {
    node.descendants()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
        .unwrap_or_default()
        .to_string()
}

fn any_text(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<char>(), 0..max).prop_map(String::from_iter)
}

fn note_strategy() -> impl Strategy<Value = Note> {
    (
        "[a-z0-9-]{1,12}",
        any_text(40),
        any_text(20),
        any_text(80),
        0i64..4_000_000_000,
        -50_400i32..=50_400,
    )
        .prop_map(|(slug, title, author, body, seconds, offset)| Note {
            slug,
            title,
            author,
            body,
            updated: FixedTimestamp::new(seconds, offset / 60 * 60),
        })
}

#[test]
fn test_single_entry_document() {
    let notebook = Notebook {
        notes: vec![Note {
            slug: "first".to_string(),
            title: "Fix <bug> & \"typo\"".to_string(),
            author: "Ann".to_string(),
            body: "hello".to_string(),
            updated: FixedTimestamp::new(1_330_836_630, 3600),
        }],
        updated: None,
    };
    let document = FeedBuilder::new(&notebook).build().expect("build");

    assert_eq!(
        document,
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<feed xmlns=\"http://www.w3.org/2005/Atom\">\n",
            "  <id>https://notes.example.com/</id>\n",
            "  <title>Notebook</title>\n",
            "  <updated>2012-03-04T05:50:30+01:00</updated>\n",
            "  <link href=\"https://notes.example.com/\"/>\n",
            "  <entry>\n",
            "    <id>https://notes.example.com/first?v=\"1\"&amp;x=&lt;y&gt;</id>\n",
            "    <title>Fix &lt;bug&gt; &amp; \"typo\"</title>\n",
            "    <updated>2012-03-04T05:50:30+01:00</updated>\n",
            "    <link href=\"https://notes.example.com/first?v=&quot;1&quot;&amp;x=&lt;y&gt;\"/>\n",
            "    <author><name>Ann</name></author>\n",
            "    <content type=\"html\">&lt;pre&gt;hello&lt;/pre&gt;</content>\n",
            "  </entry>\n",
            "</feed>\n",
        )
    );
}

#[test]
fn test_scenario_title_parses_as_xml() {
    let title = "Fix <bug> & \"typo\"";
    let notebook = Notebook {
        notes: vec![Note {
            slug: "typo".to_string(),
            title: title.to_string(),
            author: "Ann".to_string(),
            body: "+\u{c}\n+(defun f ())\n".to_string(),
            updated: FixedTimestamp::utc(1_330_000_000),
        }],
        updated: None,
    };
    let document = FeedBuilder::new(&notebook).build().expect("build");
    let parsed = roxmltree::Document::parse(&document).expect("well-formed XML");

    assert_eq!(
        parsed.root_element().tag_name().namespace(),
        Some("http://www.w3.org/2005/Atom")
    );
    let entry = parsed
        .descendants()
        .find(|n| n.has_tag_name("entry"))
        .expect("entry");
    assert_eq!(child_text(entry, "title"), title);

    let html = child_text(entry, "content");
    let pre = roxmltree::Document::parse(&html).expect("well-formed HTML");
    assert_eq!(child_text(pre.root(), "pre"), "+\u{fffd}\n+(defun f ())\n");
}

#[test]
fn test_empty_notebook_needs_explicit_updated() {
    let notebook = Notebook {
        notes: Vec::new(),
        updated: None,
    };
    assert!(matches!(
        FeedBuilder::new(&notebook).build(),
        Err(FeedError::MissingUpdated)
    ));

    let notebook = Notebook {
        updated: Some(FixedTimestamp::utc(0)),
        ..notebook
    };
    let document = FeedBuilder::new(&notebook).build().expect("build");
    assert!(document.contains("<updated>1970-01-01T00:00:00+00:00</updated>"));
}

proptest! {
    /// Every entry field parses back to the value the source supplied
    #[test]
    fn prop_fields_survive_serialization(notes in proptest::collection::vec(note_strategy(), 1..5)) {
        let notebook = Notebook { notes: notes.clone(), updated: None };
        let document = FeedBuilder::new(&notebook).build().expect("build");
        let parsed = roxmltree::Document::parse(&document).expect("well-formed XML");

        let entries: Vec<_> = parsed
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("entry"))
            .collect();
        prop_assert_eq!(entries.len(), notes.len());
        for (entry, note) in entries.iter().zip(&notes) {
            prop_assert_eq!(child_text(*entry, "title"), xml_safe(&note.title));
            prop_assert_eq!(child_text(*entry, "name"), xml_safe(&note.author));

            let html = child_text(*entry, "content");
            let pre = roxmltree::Document::parse(&html).expect("well-formed HTML");
            prop_assert_eq!(child_text(pre.root(), "pre"), xml_safe(&note.body));

            let href = entry
                .children()
                .find(|n| n.has_tag_name("link"))
                .and_then(|n| n.attribute("href"))
                .expect("link href");
            prop_assert_eq!(
                href,
                format!("https://notes.example.com/{}?v=\"1\"&x=<y>", note.slug)
            );
            prop_assert_eq!(child_text(*entry, "id"), href);
        }
    }

    /// Streaming and buffered output are byte-identical
    #[test]
    fn prop_write_to_matches_build(notes in proptest::collection::vec(note_strategy(), 0..4)) {
        let notebook = Notebook { notes, updated: Some(FixedTimestamp::utc(1)) };
        let builder = FeedBuilder::new(&notebook);
        let mut streamed = Vec::new();
        builder.write_to(&mut streamed).expect("write");
        prop_assert_eq!(streamed, builder.build().expect("build").into_bytes());
    }
}
