// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Fuzz target for the feed builder
//!
//! Arbitrary feed metadata must either build or fail with an error, and the
//! streamed output must match the built document.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use gitatom_feed::{FeedBuilder, FeedError, FeedSource, FixedTimestamp};

#[derive(Debug, Arbitrary)]
struct Post {
    title: String,
    seconds: i64,
    offset_seconds: i32,
    link: Option<String>,
    author: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Arbitrary)]
struct Blog {
    id: Option<String>,
    title: String,
    posts: Vec<Post>,
}

impl FeedSource for Blog {
    type Entry = usize;
    type Error = FeedError;

    fn entries(&self) -> Result<Vec<usize>, FeedError> {
        Ok((0..self.posts.len()).collect())
    }

    fn feed_title(&self) -> String {
        self.title.clone()
    }

    fn feed_id(&self) -> Option<String> {
        self.id.clone()
    }

    fn entry_title(&self, entry: &usize) -> String {
        self.posts[*entry].title.clone()
    }

    fn entry_updated(&self, entry: &usize) -> FixedTimestamp {
        let post = &self.posts[*entry];
        FixedTimestamp::new(post.seconds, post.offset_seconds)
    }

    fn entry_id(&self, entry: &usize) -> Option<String> {
        Some(format!("urn:post:{entry}"))
    }

    fn entry_link(&self, entry: &usize) -> Option<String> {
        self.posts[*entry].link.clone()
    }

    fn entry_author(&self, entry: &usize) -> Option<String> {
        self.posts[*entry].author.clone()
    }

    fn entry_text_content(&self, entry: &usize) -> Result<Option<String>, FeedError> {
        Ok(self.posts[*entry].body.clone())
    }
}

fuzz_target!(|blog: Blog| {
    let builder = FeedBuilder::new(&blog);
    let built = builder.build();

    let mut streamed = Vec::new();
    let written = builder.write_to(&mut streamed);

    match (built, written) {
        (Ok(document), Ok(())) => assert_eq!(document.as_bytes(), streamed.as_slice()),
        (Err(_), Err(_)) => {}
        (built, written) => panic!("build and write_to disagree: {built:?} / {written:?}"),
    }
});
