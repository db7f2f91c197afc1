use crate::benchmarks::{BoardAnalysis, BoardWordStats};
use crate::error::{LexiError, LxResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const REQUIRED_COLUMNS: [&str; 2] = ["word_count", "min_expected"];

/// One row of a board CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardRecord {
    #[serde(default)]
    pub label: Option<String>,
    pub word_count: u32,
    pub min_expected: u32,
    #[serde(default)]
    pub rarity_score_potential: Option<f64>,
    #[serde(default)]
    pub avg_word_length: Option<f64>,
    #[serde(default)]
    pub connectivity_score: Option<f64>,
    #[serde(default)]
    pub max_score_potential: Option<f64>,
}

impl BoardRecord {
    pub fn stats(&self) -> BoardWordStats {
        BoardWordStats::new(self.word_count, self.min_expected)
    }

    /// Only complete rows take the enhanced path.
    pub fn analysis(&self) -> Option<BoardAnalysis> {
        Some(BoardAnalysis {
            rarity_score_potential: self.rarity_score_potential?,
            avg_word_length: self.avg_word_length?,
            connectivity_score: self.connectivity_score?,
            max_score_potential: self.max_score_potential?,
            ..Default::default()
        })
    }

    /// Some but not all analysis columns are filled in.
    pub fn is_partial(&self) -> bool {
        let filled = [
            self.rarity_score_potential,
            self.avg_word_length,
            self.connectivity_score,
            self.max_score_potential,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count();
        filled > 0 && filled < 4
    }
}

#[derive(Debug, Default)]
pub struct BoardBatch {
    pub records: Vec<BoardRecord>,
    pub skipped: usize,
    /// Rows kept on the basic path because their analysis is incomplete.
    pub partial: usize,
}

pub fn load_boards<P: AsRef<Path>>(path: P) -> LxResult<BoardBatch> {
    let path = path.as_ref();
    debug!("Loading boards from {:?}", path);
    let file = File::open(path)?;
    load_boards_from_reader(file)
}

pub fn load_boards_from_reader<R: Read>(reader: R) -> LxResult<BoardBatch> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LexiError::Validation(format!(
                "board CSV is missing required column '{}'",
                column
            )));
        }
    }

    let mut batch = BoardBatch::default();
    for (row_idx, result) in rdr.deserialize::<BoardRecord>().enumerate() {
        match result {
            // header is line 1
            Ok(record) => {
                if record.is_partial() {
                    warn!(
                        "[Row {}] incomplete analysis columns, using basic benchmarks",
                        row_idx + 2
                    );
                    batch.partial += 1;
                }
                batch.records.push(record);
            }
            Err(e) => {
                warn!("[Row {}] skipped: {}", row_idx + 2, e);
                batch.skipped += 1;
            }
        }
    }

    if batch.skipped > 0 {
        warn!("Skipped {} invalid board rows.", batch.skipped);
    }
    debug!("Loaded {} boards", batch.records.len());

    Ok(batch)
}
