// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads the chatbot corpus from a CSV file:
//
//   Q,A,label
//   12시 땡!,하루가 또 가네요.,0
//   1지망 학교 떨어졌어,위로해 드립니다.,0
//
// Only the `Q` and `A` columns are used; the header row must
// name both. Cells may contain commas and quotes — the csv
// crate handles RFC 4180 quoting.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::domain::qa_pair::QaPair;
use crate::domain::traits::CorpusSource;
use crate::error::{PrepError, Result};

/// Loads Q/A pairs from a CSV file with a header row.
/// Implements the CorpusSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct CsvCorpus {
    path: PathBuf,
}

impl CsvCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, message: impl Into<String>) -> PrepError {
        PrepError::MalformedCorpus {
            path:    self.path.clone(),
            message: message.into(),
        }
    }
}

impl CorpusSource for CsvCorpus {
    fn load_all(&self) -> Result<Vec<QaPair>> {
        if !self.path.exists() {
            return Err(PrepError::MissingCorpus { path: self.path.clone() });
        }

        let file = File::open(&self.path).map_err(|e| PrepError::io(&self.path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| self.malformed(format!("cannot read header: {e}")))?
            .clone();
        for column in ["Q", "A"] {
            if !headers.iter().any(|h| h == column) {
                return Err(self.malformed(format!("missing column '{column}'")));
            }
        }

        let mut pairs = Vec::new();
        for (i, row) in reader.deserialize::<QaPair>().enumerate() {
            // +2: one for the header, one for 1-based numbering
            let pair = row.map_err(|e| self.malformed(format!("row {}: {e}", i + 2)))?;
            pairs.push(pair);
        }

        tracing::info!(
            "Loaded {} Q/A pairs from '{}'",
            pairs.len(),
            self.path.display()
        );
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scratch, WriteFile};

    #[test]
    fn test_reads_q_and_a_ignoring_extra_columns() {
        let dir  = scratch();
        let path = dir.write("corpus.csv", "Q,A,label\n\"hi, you\",hello there,0\nbye,see you,1\n");
        let pairs = CsvCorpus::new(&path).load_all().unwrap();
        assert_eq!(
            pairs,
            vec![QaPair::new("hi, you", "hello there"), QaPair::new("bye", "see you")]
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let dir  = scratch();
        let path = dir.write("corpus.csv", "A,Q\nanswer,question\n");
        let pairs = CsvCorpus::new(&path).load_all().unwrap();
        assert_eq!(pairs, vec![QaPair::new("question", "answer")]);
    }

    #[test]
    fn test_missing_file_is_missing_corpus() {
        let dir = scratch();
        let err = CsvCorpus::new(dir.path().join("nope.csv")).load_all().unwrap_err();
        assert!(matches!(err, PrepError::MissingCorpus { .. }));
    }

    #[test]
    fn test_missing_answer_column_is_malformed() {
        let dir  = scratch();
        let path = dir.write("corpus.csv", "Q,B\nx,y\n");
        let err  = CsvCorpus::new(&path).load_all().unwrap_err();
        assert!(matches!(err, PrepError::MalformedCorpus { .. }));
        assert!(err.to_string().contains("'A'"));
    }

    #[test]
    fn test_header_only_gives_empty_corpus() {
        let dir  = scratch();
        let path = dir.write("corpus.csv", "Q,A\n");
        assert!(CsvCorpus::new(&path).load_all().unwrap().is_empty());
    }
}
