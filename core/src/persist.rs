use crate::{DocId, Posting, TermId};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Dictionary for one segment: term -> term id, plus document frequency
/// indexed by term id.
pub type Dictionary = (HashMap<String, TermId>, Vec<u32>);

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: u64,
    pub created_at: String,
    pub version: u32,
}

/// On-disk layout of one index segment (title/, body/ or anchor/).
pub struct SegmentPaths {
    pub root: PathBuf,
}

impl SegmentPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn dictionary(&self) -> PathBuf { self.root.join("dictionary.bin") }
    fn doc_lens(&self) -> PathBuf { self.root.join("doclen.bin") }
    fn postings_dir(&self) -> PathBuf { self.root.join("postings") }
    fn postings_for(&self, term_id: TermId) -> PathBuf {
        self.postings_dir().join(format!("{term_id:08}.postings.bin"))
    }
}

/// On-disk layout of the flat signal tables (signals/).
pub struct SignalPaths {
    pub root: PathBuf,
}

impl SignalPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn pagerank(&self) -> PathBuf { self.root.join("pagerank.bin") }
    fn pageviews(&self) -> PathBuf { self.root.join("pageviews.bin") }
    fn titles(&self) -> PathBuf { self.root.join("titles.bin") }
}

fn write_bincode<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut f = File::create(path)?;
    let bytes = bincode::serialize(value)?;
    f.write_all(&bytes)?;
    Ok(())
}

fn read_bincode<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut f = File::open(path)?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    Ok(bincode::deserialize(&buf)?)
}

pub fn save_dictionary(paths: &SegmentPaths, dict: &Dictionary) -> Result<()> {
    write_bincode(&paths.dictionary(), dict)
}

pub fn load_dictionary(paths: &SegmentPaths) -> Result<Dictionary> {
    read_bincode(&paths.dictionary())
}

pub fn save_doc_lens(paths: &SegmentPaths, lens: &HashMap<DocId, u32>) -> Result<()> {
    write_bincode(&paths.doc_lens(), lens)
}

pub fn load_doc_lens(paths: &SegmentPaths) -> Result<HashMap<DocId, u32>> {
    read_bincode(&paths.doc_lens())
}

pub fn save_postings_for_term(paths: &SegmentPaths, term_id: TermId, postings: &Vec<Posting>) -> Result<()> {
    write_bincode(&paths.postings_for(term_id), postings)
}

pub fn load_postings_for_term(paths: &SegmentPaths, term_id: TermId) -> Result<Vec<Posting>> {
    read_bincode(&paths.postings_for(term_id))
}

pub fn save_pagerank(paths: &SignalPaths, table: &HashMap<DocId, f64>) -> Result<()> {
    write_bincode(&paths.pagerank(), table)
}

pub fn load_pagerank(paths: &SignalPaths) -> Result<HashMap<DocId, f64>> {
    read_bincode(&paths.pagerank())
}

pub fn save_pageviews(paths: &SignalPaths, table: &HashMap<DocId, u64>) -> Result<()> {
    write_bincode(&paths.pageviews(), table)
}

pub fn load_pageviews(paths: &SignalPaths) -> Result<HashMap<DocId, u64>> {
    read_bincode(&paths.pageviews())
}

pub fn save_titles(paths: &SignalPaths, table: &HashMap<DocId, String>) -> Result<()> {
    write_bincode(&paths.titles(), table)
}

pub fn load_titles(paths: &SignalPaths) -> Result<HashMap<DocId, String>> {
    read_bincode(&paths.titles())
}

pub fn save_meta<P: AsRef<Path>>(root: P, meta: &MetaFile) -> Result<()> {
    create_dir_all(root.as_ref())?;
    let mut f = File::create(root.as_ref().join("meta.json"))?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta<P: AsRef<Path>>(root: P) -> Result<MetaFile> {
    let mut f = File::open(root.as_ref().join("meta.json"))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    Ok(serde_json::from_str(&buf)?)
}
