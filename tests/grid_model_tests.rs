//! Tests for the grid model and the select mutation
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tap_grid::{CellData, CellId, GridConfig, GridError, GridModel};

fn model_with(counts: &[usize]) -> GridModel {
    let mut config = GridConfig::default();
    config.section_count = counts.len();
    GridModel::with_section_counts(config, counts).unwrap()
}

#[test]
fn test_identity_only_equality() {
    let mut a = CellData::new(2, 4);
    let mut b = CellData::new(2, 4);
    a.value = 10;
    a.row_total = 3;
    b.column_total = 7;
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    assert_eq!(set.len(), 1, "cells must deduplicate by identity alone");

    let c = CellData::new(2, 5);
    assert_ne!(CellData::new(2, 4), c);
    assert_ne!(CellData::new(3, 4), CellData::new(2, 4));
}

#[test]
fn test_random_population_within_bounds() {
    let config = GridConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let model = GridModel::new(config.clone(), &mut rng).unwrap();

    assert_eq!(model.sections().len(), 5);
    for (i, section) in model.sections().iter().enumerate() {
        assert_eq!(section.index, i);
        assert_eq!(section.title, format!("Section {}", i + 1));
        assert!(section.cell_count() >= config.min_cells);
        assert!(section.cell_count() <= config.max_cells);
        for (p, cell) in section.items.iter().enumerate() {
            assert_eq!(cell.index, p);
            assert_eq!(cell.title, format!("Cell {}", p + 1));
            assert_eq!(cell.value, 0);
            assert_eq!(cell.row_total, 0);
            assert_eq!(cell.column_total, 0);
        }
    }
}

#[test]
fn test_deterministic_with_same_seed() {
    let config = GridConfig::default();
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = GridModel::new(config.clone(), &mut rng_a).unwrap();
    let b = GridModel::new(config, &mut rng_b).unwrap();
    let counts_a: Vec<usize> = a.sections().iter().map(|s| s.cell_count()).collect();
    let counts_b: Vec<usize> = b.sections().iter().map(|s| s.cell_count()).collect();
    assert_eq!(counts_a, counts_b);
}

#[test]
fn test_increment_conservation() {
    let mut model = model_with(&[8, 10, 7]);
    let taps = [
        (0, 0),
        (0, 7),
        (0, 7),
        (1, 3),
        (2, 6),
        (1, 3),
        (1, 3),
        (0, 0),
    ];
    for &(section, position) in &taps {
        model.select_cell(section, position).unwrap();
    }

    for section in model.sections() {
        for cell in &section.items {
            let expected = taps
                .iter()
                .filter(|&&(s, p)| s == cell.section && p == cell.index)
                .count() as u32;
            assert_eq!(
                cell.value, expected,
                "value of ({}, {})",
                cell.section, cell.index
            );
        }
    }
}

#[test]
fn test_row_and_column_totals() {
    let columns = 3;
    let mut model = model_with(&[8, 12]);
    let taps = [(0, 0), (0, 4), (0, 7), (1, 11), (1, 0), (0, 4)];
    for &(section, position) in &taps {
        model.select_cell(section, position).unwrap();
    }

    for section in model.sections() {
        for cell in &section.items {
            let row_hits = taps
                .iter()
                .filter(|&&(s, p)| s == cell.section && p / columns == cell.index / columns)
                .count() as u32;
            let col_hits = taps
                .iter()
                .filter(|&&(s, p)| s == cell.section && p % columns == cell.index % columns)
                .count() as u32;
            assert_eq!(
                cell.row_total, row_hits,
                "row_total of ({}, {})",
                cell.section, cell.index
            );
            assert_eq!(
                cell.column_total, col_hits,
                "column_total of ({}, {})",
                cell.section, cell.index
            );
        }
    }
}

#[test]
fn test_changed_set_is_deduplicated() {
    let mut model = model_with(&[9]);
    // Position 4 sits in row 1 (3..=5) and column 1 (1, 4, 7); it is
    // hit by both passes but must appear once
    let changed = model.select_cell(0, 4).unwrap();
    let expected: HashSet<CellId> = [3, 4, 5, 1, 7]
        .iter()
        .map(|&i| CellId::new(0, i))
        .collect();
    assert_eq!(changed, expected);
}

#[test]
fn test_partial_final_row_clamps() {
    // 8 cells, 3 columns: grid rows are [0,1,2], [3,4,5], [6,7].
    // Selecting 7 (row 2, column 1) must not touch position 8.
    let mut model = model_with(&[8]);
    let changed = model.select_cell(0, 7).unwrap();

    let expected: HashSet<CellId> = [1, 4, 6, 7].iter().map(|&i| CellId::new(0, i)).collect();
    assert_eq!(changed, expected);

    let cell = |i: usize| model.cell(CellId::new(0, i)).unwrap();
    assert_eq!(cell(7).value, 1);
    assert_eq!(cell(6).row_total, 1);
    assert_eq!(cell(7).row_total, 1);
    assert_eq!(cell(1).column_total, 1);
    assert_eq!(cell(4).column_total, 1);
    assert_eq!(cell(7).column_total, 1);
    // Nothing outside the changed set moved
    for i in [0, 2, 3, 5] {
        assert_eq!(cell(i).value, 0);
        assert_eq!(cell(i).row_total, 0);
        assert_eq!(cell(i).column_total, 0);
    }
}

#[test]
fn test_out_of_range_select_fails_fast() {
    let mut model = model_with(&[8, 10]);

    let err = model.select_cell(2, 0).unwrap_err();
    assert!(matches!(err, GridError::InvalidSection { section: 2, .. }));

    let err = model.select_cell(0, 8).unwrap_err();
    assert!(matches!(
        err,
        GridError::InvalidCell {
            section: 0,
            position: 8,
            cell_count: 8
        }
    ));

    // Failed selects leave no partial mutation behind
    for section in model.sections() {
        for cell in &section.items {
            assert_eq!(cell.value, 0);
            assert_eq!(cell.row_total, 0);
            assert_eq!(cell.column_total, 0);
        }
    }
}

#[test]
fn test_header_titles() {
    let model = model_with(&[7, 7, 7]);
    assert_eq!(model.header_title(0).unwrap(), "Section 1");
    assert_eq!(model.header_title(2).unwrap(), "Section 3");
    assert!(model.header_title(3).is_err());
}

#[test]
fn test_error_display() {
    let err = GridError::InvalidCell {
        section: 1,
        position: 9,
        cell_count: 8,
    };
    let display = format!("{}", err);
    assert!(display.contains("position 9"));
    assert!(display.contains("section 1"));
    assert!(display.contains("8 cells"));
}
