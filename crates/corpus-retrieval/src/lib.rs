//! Reference-corpus retrieval for regulatory lookups.
//!
//! Provides two independent pieces:
//! - [`citations`]: a static registry resolving rule keys to citation
//!   strings, used by every compliance check.
//! - [`ReferenceCorpus`]: free-text TF-IDF lookup over a local directory
//!   of reference `.txt` files, for exploratory "explain this issue"
//!   queries. The corpus is scanned in full per query; there is no
//!   persisted index, which is acceptable only because the reference set
//!   is small and local.

pub mod citations;

pub use citations::cite;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// TF-IDF retriever over a directory of reference text files.
pub struct ReferenceCorpus {
    dir: PathBuf,
}

impl ReferenceCorpus {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Rank reference files against `query` and return the top `k`
    /// labels. Returns an empty vec when the corpus directory is absent
    /// or holds no readable `.txt` files.
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<String> {
        let corpus = load_corpus(&self.dir);
        if corpus.is_empty() {
            return Vec::new();
        }

        let q_tokens = tokenize(query);
        let q_tf = term_counts(&q_tokens);

        // Document frequency over the corpus.
        let doc_tfs: Vec<(String, HashMap<String, usize>)> = corpus
            .iter()
            .map(|(name, text)| (name.clone(), term_counts(&tokenize(text))))
            .collect();
        let mut dfs: HashMap<&str, usize> = HashMap::new();
        for (_, tf) in &doc_tfs {
            for term in tf.keys() {
                *dfs.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        let n = corpus.len() as f64;

        let mut scores: Vec<(f64, &str)> = doc_tfs
            .iter()
            .map(|(name, tf)| {
                (cosine_similarity(&q_tf, tf, &dfs, n), name.as_str())
            })
            .collect();
        // Stable sort: descending score, corpus order on ties.
        scores.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        scores
            .into_iter()
            .take(k)
            .map(|(_, name)| format!("[REF] {name}"))
            .collect()
    }
}

/// Lower-case and split on non-alphanumeric boundaries.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn term_counts(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity of TF-IDF vectors over the union of query and
/// document terms. IDF is smoothed: ln((N+1)/(1+df)) + 1.
fn cosine_similarity(
    q_tf: &HashMap<String, usize>,
    d_tf: &HashMap<String, usize>,
    dfs: &HashMap<&str, usize>,
    n: f64,
) -> f64 {
    let terms: HashSet<&str> = q_tf
        .keys()
        .chain(d_tf.keys())
        .map(String::as_str)
        .collect();

    let mut dot = 0.0;
    let mut q_norm = 0.0;
    let mut d_norm = 0.0;
    for term in terms {
        let df = dfs.get(term).copied().unwrap_or(0) as f64;
        let idf = ((n + 1.0) / (1.0 + df)).ln() + 1.0;
        let q_w = q_tf.get(term).copied().unwrap_or(0) as f64 * idf;
        let d_w = d_tf.get(term).copied().unwrap_or(0) as f64 * idf;
        dot += q_w * d_w;
        q_norm += q_w * q_w;
        d_norm += d_w * d_w;
    }

    let denom = q_norm.sqrt() * d_norm.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

/// Load `(filename, contents)` pairs for every readable `.txt` file,
/// sorted by filename. Filename order doubles as the stable tie-break
/// order for equal scores.
fn load_corpus(dir: &Path) -> Vec<(String, String)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut docs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        if !name.to_lowercase().ends_with(".txt") {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(text) => docs.push((name, text)),
            Err(err) => {
                tracing::debug!(file = %name, %err, "skipping unreadable reference file");
            }
        }
    }
    docs.sort_by(|a, b| a.0.cmp(&b.0));
    docs
}
