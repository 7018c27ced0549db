//! Custom assertions for testing

/// Assert two floats are equal within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}

/// Assert a set of percentages adds up to 100 (within rounding)
pub fn assert_percentages_sum_to_100<I: IntoIterator<Item = f64>>(values: I) {
    let total: f64 = values.into_iter().sum();
    assert!(
        (total - 100.0).abs() < 1e-9,
        "percentages sum to {}, expected 100",
        total
    );
}

/// Assert that a FASTA content is valid
pub fn assert_valid_fasta(content: &str) {
    let lines: Vec<&str> = content.lines().collect();
    assert!(!lines.is_empty(), "FASTA content is empty");

    let mut has_header = false;
    let mut has_sequence = false;

    for line in lines {
        if let Some(title) = line.strip_prefix('>') {
            assert!(!title.trim().is_empty(), "Empty FASTA header found");
            has_header = true;
        } else if !line.is_empty() {
            assert!(
                line.chars()
                    .all(|c| "ATGCNRYKMSWBDHV-".contains(c.to_ascii_uppercase())),
                "Invalid sequence character found: {}",
                line
            );
            has_sequence = true;
        }
    }

    assert!(has_header, "No FASTA headers found");
    assert!(has_sequence, "No sequences found");
}
