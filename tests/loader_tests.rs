use lexichain::loader::{load_boards, load_boards_from_reader};
use lexichain::{BenchmarkCalculator, LexiError};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const HEADER: &str = "label,word_count,min_expected,rarity_score_potential,avg_word_length,connectivity_score,max_score_potential";

#[test]
fn test_loader_parses_basic_and_enhanced_rows() {
    let data = format!(
        "{}\nplain,24,12,,,,\nrich,30,16,1200,6.0,1.1,9000\n",
        HEADER
    );
    let batch = load_boards_from_reader(Cursor::new(data)).unwrap();

    assert_eq!(batch.skipped, 0);
    assert_eq!(batch.partial, 0);
    assert_eq!(batch.records.len(), 2);
    assert!(batch.records.iter().all(|r| !r.is_partial()));

    let plain = &batch.records[0];
    assert_eq!(plain.label.as_deref(), Some("plain"));
    assert!(plain.analysis().is_none());

    let rich = &batch.records[1];
    let analysis = rich.analysis().unwrap();
    assert_eq!(analysis.rarity_score_potential, 1200.0);
    assert_eq!(analysis.max_score_potential, 9000.0);
    assert_eq!(rich.stats().min_expected_word_count, 16);
}

#[test]
fn test_loader_accepts_minimal_columns() {
    let data = "word_count,min_expected\n0,12\n 40 , 16 \n";
    let batch = load_boards_from_reader(Cursor::new(data)).unwrap();

    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.records[1].word_count, 40);
    assert!(batch.records[1].label.is_none());
    assert!(batch.records.iter().all(|r| r.analysis().is_none()));
}

#[test]
fn test_loader_partial_analysis_falls_back_to_basic() {
    let data = format!("{}\nhalf,20,12,1200,,1.0,\n", HEADER);
    let batch = load_boards_from_reader(Cursor::new(data)).unwrap();

    assert_eq!(batch.partial, 1);
    let record = &batch.records[0];
    assert!(record.is_partial());
    let calc = BenchmarkCalculator::default();
    assert_eq!(
        calc.compute(&record.stats(), record.analysis().as_ref()),
        calc.basic(20, 12)
    );
}

#[test]
fn test_loader_skips_malformed_rows() {
    let data = format!(
        "{}\nok,24,12,,,,\nnegative,-3,12,,,,\ntext,many,12,,,,\nempty,,12,,,,\nalso_ok,5,20,,,,\n",
        HEADER
    );
    let batch = load_boards_from_reader(Cursor::new(data)).unwrap();

    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.skipped, 3);
    assert_eq!(batch.records[1].label.as_deref(), Some("also_ok"));
}

#[test]
fn test_loader_requires_count_columns() {
    let data = "label,words\nx,10\n";
    let err = load_boards_from_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, LexiError::Validation(_)));
    assert!(err.to_string().contains("word_count"));
}

#[test]
fn test_loader_reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "word_count,min_expected").unwrap();
    writeln!(file, "12,12").unwrap();

    let batch = load_boards(file.path()).unwrap();
    assert_eq!(batch.records.len(), 1);
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let err = load_boards("no/such/boards.csv").unwrap_err();
    assert!(matches!(err, LexiError::Io(_)));
}
