mod common;

use common::{indexed_matrix, tiny_alphabet};
use prolom::error::ProlomError;
use prolom::scorer::{self, corpus, loader, TransitionMatrix};
use rstest::rstest;
use tempfile::tempdir;

// Alphabet "ABC_" with weight(i, j) = i * 10 + j.
#[rstest]
#[case("", 0.0)]
#[case("A", 0.0)]
#[case("AB", 1.0)]
#[case("ABC", 13.0)]
#[case("AA__", 36.0)]
#[case("_A", 30.0)]
fn test_plausibility_known_values(#[case] text: &str, #[case] expected: f32) {
    let alphabet = tiny_alphabet();
    let matrix = indexed_matrix(alphabet.len());

    let score = scorer::plausibility(text, &alphabet, &matrix).unwrap();
    assert_eq!(score, expected);
}

#[test]
fn test_plausibility_is_deterministic() {
    let alphabet = common::default_alphabet();
    let matrix = common::reference_matrix(&alphabet);
    let text = "THE_RIVER_RAN_SLOW_AND_BROWN";

    let a = scorer::plausibility(text, &alphabet, &matrix).unwrap();
    let b = scorer::plausibility(text, &alphabet, &matrix).unwrap();
    assert_eq!(a, b);
    assert!(a.is_finite());
}

#[test]
fn test_plausibility_rejects_foreign_symbols() {
    let alphabet = tiny_alphabet();
    let matrix = indexed_matrix(alphabet.len());

    assert!(matches!(
        scorer::plausibility("ABX", &alphabet, &matrix),
        Err(ProlomError::Symbol('X'))
    ));
}

#[test]
fn test_plausibility_rejects_dimension_mismatch() {
    let alphabet = tiny_alphabet();
    let matrix = indexed_matrix(3);

    assert!(matches!(
        scorer::plausibility("AB", &alphabet, &matrix),
        Err(ProlomError::Config(_))
    ));
}

#[test]
fn test_matrix_rejects_wrong_entry_count() {
    assert!(matches!(
        TransitionMatrix::from_log_weights(3, vec![0.0; 8]),
        Err(ProlomError::Config(_))
    ));
}

#[test]
fn test_matrix_floors_non_finite_weights() {
    let weights = vec![1.0, f32::NEG_INFINITY, f32::NAN, 2.0];
    let matrix = TransitionMatrix::from_log_weights(2, weights).unwrap();

    assert_eq!(matrix.weight(0, 0), 1.0);
    assert_eq!(matrix.weight(0, 1), 0.0);
    assert_eq!(matrix.weight(1, 0), 0.0);
    assert_eq!(matrix.weight(1, 1), 2.0);
}

#[test]
fn test_reference_matrix_counts_and_smoothing() {
    let alphabet = prolom::alphabet::Alphabet::new("AB_").unwrap();
    let matrix = corpus::from_reference_text("AB AB AB", &alphabet).unwrap();

    // "AB_AB_AB": AB x3, B_ x2, _A x2; everything else is smoothed to ln(1)
    assert!((matrix.weight(0, 1) - 3.0f32.ln()).abs() < 1e-6);
    assert!((matrix.weight(1, 2) - 2.0f32.ln()).abs() < 1e-6);
    assert!((matrix.weight(2, 0) - 2.0f32.ln()).abs() < 1e-6);
    assert_eq!(matrix.weight(0, 0), 0.0);
    assert_eq!(matrix.weight(1, 0), 0.0);
}

#[test]
fn test_matrix_csv_round_trip() {
    let alphabet = common::default_alphabet();
    let matrix = common::reference_matrix(&alphabet);

    let dir = tempdir().unwrap();
    let path = dir.path().join("tm_reference.csv");

    loader::save_matrix(&matrix, &path).unwrap();
    let loaded = loader::load_matrix(&path).unwrap();

    assert_eq!(loaded, matrix);
}

#[test]
fn test_loader_floors_unparseable_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tm_bad.csv");
    std::fs::write(&path, "1.5,-inf\nnot_a_number,2.5\n").unwrap();

    let matrix = loader::load_matrix(&path).unwrap();
    assert_eq!(matrix.dim(), 2);
    assert_eq!(matrix.weight(0, 0), 1.5);
    assert_eq!(matrix.weight(0, 1), 0.0);
    assert_eq!(matrix.weight(1, 0), 0.0);
    assert_eq!(matrix.weight(1, 1), 2.5);
}

#[test]
fn test_loader_rejects_non_square_input() {
    let dir = tempdir().unwrap();

    let ragged = dir.path().join("tm_ragged.csv");
    std::fs::write(&ragged, "1,2\n3\n").unwrap();
    assert!(matches!(
        loader::load_matrix(&ragged),
        Err(ProlomError::Config(_))
    ));

    let oblong = dir.path().join("tm_oblong.csv");
    std::fs::write(&oblong, "1,2,3\n4,5,6\n").unwrap();
    assert!(matches!(
        loader::load_matrix(&oblong),
        Err(ProlomError::Config(_))
    ));

    let empty = dir.path().join("tm_empty.csv");
    std::fs::write(&empty, "").unwrap();
    assert!(matches!(
        loader::load_matrix(&empty),
        Err(ProlomError::Config(_))
    ));
}
