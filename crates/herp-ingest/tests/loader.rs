//! Integration tests for dataset loading.

use std::io::Write;

use herp_ingest::{DatasetSource, IngestError, LoadOptions, load_dataset, read_dataset};
use tempfile::NamedTempFile;

const CHECKLIST: &str = "\
Famiglia,Genere,Sottogenere,Specie,Sottospecie,Autore e anno specie,Autore e anno sottospecie,Lo,Pi
Bufonidae,Bufo,,bufo,,\"(Linnaeus, 1758)\",,y,y
Bufonidae,Bufo,,bufo,spinosus,\"(Linnaeus, 1758)\",\"Daudin, 1803\",,?
Ranidae,,,lessonae,,\"Camerano, 1882\",,y,
Ranidae,Rana,,dalmatina,,\"Fitzinger in Bonaparte, 1838\",,y,y
";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_load_dataset_from_file() {
    let file = create_temp_csv(CHECKLIST);
    let source = DatasetSource::File(file.path().to_path_buf());

    let dataset = load_dataset(&source, &LoadOptions::default()).unwrap();

    assert_eq!(dataset.headers.len(), 9);
    assert_eq!(dataset.headers[0], "Famiglia");
    assert_eq!(dataset.total_rows, 4);
    assert_eq!(dataset.dropped_rows, 1);
    let names: Vec<&str> = dataset
        .records
        .iter()
        .map(|record| record.scientific_name())
        .collect();
    assert_eq!(
        names,
        vec!["Bufo bufo", "Bufo bufo spinosus", "Rana dalmatina"]
    );
    assert_eq!(dataset.records[1].author(), "Daudin, 1803");
    assert_eq!(
        dataset.records[1].species_author(),
        Some("(Linnaeus, 1758)")
    );
    assert_eq!(dataset.records[1].value_of("Pi"), "?");
}

#[test]
fn test_trailing_and_blank_lines_are_skipped() {
    let content = format!("{CHECKLIST}\n,,,,,,,,\n\n\n");
    let dataset = read_dataset(content.as_bytes(), &LoadOptions::default(), "memory").unwrap();

    assert_eq!(dataset.total_rows, 4);
    assert_eq!(dataset.records.len(), 3);
}

#[test]
fn test_short_rows_read_missing_fields_as_empty() {
    let content = "Genere,Specie,Sottospecie,Autore e anno specie\nRana,dalmatina\n";
    let dataset = read_dataset(content.as_bytes(), &LoadOptions::default(), "memory").unwrap();

    assert_eq!(dataset.records.len(), 1);
    let record = &dataset.records[0];
    assert_eq!(record.scientific_name(), "Rana dalmatina");
    assert_eq!(record.author(), "");
    assert_eq!(record.species_author(), None);
}

#[test]
fn test_semicolon_delimiter_and_bom() {
    let content = "\u{feff}Genere;Specie;Famiglia\nHyla;intermedia;Hylidae\n";
    let options = LoadOptions::default().with_delimiter(";").unwrap();
    let dataset = read_dataset(content.as_bytes(), &options, "memory").unwrap();

    assert_eq!(dataset.headers, vec!["Genere", "Specie", "Famiglia"]);
    assert_eq!(dataset.records[0].scientific_name(), "Hyla intermedia");
    assert_eq!(dataset.records[0].value_of("Famiglia"), "Hylidae");
}

#[test]
fn test_empty_source_is_an_error() {
    let result = read_dataset("".as_bytes(), &LoadOptions::default(), "memory");
    assert!(matches!(result, Err(IngestError::EmptySource { .. })));
}

#[test]
fn test_missing_taxon_column_drops_every_row() {
    let dataset = read_dataset(
        "Genere,Famiglia\nRana,Ranidae\nBufo,Bufonidae\n".as_bytes(),
        &LoadOptions::default(),
        "memory",
    )
    .unwrap();
    assert!(dataset.records.is_empty());
    assert_eq!(dataset.total_rows, 2);
    assert_eq!(dataset.dropped_rows, 2);
}

#[test]
fn test_invalid_utf8_fails_the_whole_load() {
    let mut content = b"Genere,Specie\nRana,dalmatina\n".to_vec();
    content.extend_from_slice(&[0xff, 0xfe, b',', b'x', b'\n']);
    let result = read_dataset(content.as_slice(), &LoadOptions::default(), "memory");
    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
}

#[test]
fn test_missing_file() {
    let source: DatasetSource = "/nonexistent/dir/checklist.csv".parse().unwrap();
    let result = load_dataset(&source, &LoadOptions::default());
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
