pub mod engine;
pub mod persist;
pub mod rank;
pub mod segment;
pub mod signals;
pub mod synonyms;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub type TermId = u32;
pub type DocId = u64;

/// Placeholder doc id emitted by the index-construction pipeline.
/// Postings carrying it are never scored.
pub const SENTINEL_DOC_ID: DocId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub freq: u32,
}

/// The three independently indexed fields of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Title,
    Body,
    Anchor,
}

impl Segment {
    pub fn dir_name(self) -> &'static str {
        match self {
            Segment::Title => "title",
            Segment::Body => "body",
            Segment::Anchor => "anchor",
        }
    }
}
