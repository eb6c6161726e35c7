//! Integration tests for symbol generation
//!
//! These pin down sizing, structural patterns, masking and the end-to-end
//! pipeline so that regressions in any single stage show up here.

use rust_qr_gen::encoder::bitstream::encode_for;
use rust_qr_gen::encoder::function_patterns::PatternPlacer;
use rust_qr_gen::encoder::mask::apply_mask;
use rust_qr_gen::encoder::placement::place_data;
use rust_qr_gen::encoder::sizing::select_version;
use rust_qr_gen::{
    BitMatrix, ECLevel, EncodeError, ErrorKind, MaskPattern, Symbol, Version, encode,
    encode_bytes,
};

/// Grid after patterns and data, before masking
fn unmasked_grid(payload: &[u8]) -> (BitMatrix, BitMatrix, Version, ECLevel) {
    let (version, level) = select_version(payload.len()).unwrap();
    let size = version.size();
    let mut modules = BitMatrix::square(size);
    let mut function = BitMatrix::square(size);
    PatternPlacer::new(&mut modules, &mut function).place_all(version);
    let data = encode_for(payload, version, level);
    place_data(&mut modules, &function, &data);
    (modules, function, version, level)
}

/// Independent row-run scorer
fn row_run_penalty(m: &BitMatrix) -> u32 {
    let mut total = 0;
    for y in 0..m.height() {
        let row: Vec<bool> = (0..m.width()).map(|x| m.get(x, y)).collect();
        let mut start = 0;
        while start < row.len() {
            let mut end = start;
            while end < row.len() && row[end] == row[start] {
                end += 1;
            }
            let len = (end - start) as u32;
            if len >= 5 {
                total += len - 2;
            }
            start = end;
        }
    }
    total
}

#[test]
fn test_scenario_a_localhost_url() {
    let symbol = encode("http://localhost:8080").unwrap();
    assert_eq!(symbol.payload().len(), 21);
    assert_eq!(symbol.version().number(), 2);
    assert_eq!(symbol.error_level(), ECLevel::M);
    assert_eq!(symbol.size(), 25);
}

#[test]
fn test_scenario_a_22_byte_payload() {
    // 22 bytes -> 25 required: version 1 {17,14,11,7} fails, version 2 Medium (26) fits
    let symbol = encode("http://localhost:8080/").unwrap();
    assert_eq!(symbol.version().number(), 2);
    assert_eq!(symbol.error_level(), ECLevel::M);
}

#[test]
fn test_scenario_b_empty_payload() {
    let err = encode("").unwrap_err();
    assert_eq!(err, EncodeError::EmptyPayload);
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn test_scenario_c_too_long() {
    let payload = "x".repeat(300);
    let err = encode(&payload).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert_eq!(err, EncodeError::PayloadTooLong { len: 300, max: 268 });

    // 268 + 3 = 271 is the last length that fits
    assert!(encode(&"x".repeat(268)).is_ok());
    assert!(encode(&"x".repeat(269)).is_err());
}

#[test]
fn test_scenario_d_version_1_finders_and_separators() {
    let symbol = encode("hi").unwrap();
    assert_eq!(symbol.size(), 21);

    for (ox, oy) in [(0usize, 0usize), (14, 0), (0, 14)] {
        for dy in 0..7 {
            for dx in 0..7 {
                let ring = dx == 0 || dx == 6 || dy == 0 || dy == 6;
                let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                assert_eq!(
                    symbol.is_dark(ox + dx, oy + dy),
                    ring || core,
                    "finder at ({}, {}) cell ({}, {})",
                    ox,
                    oy,
                    dx,
                    dy
                );
                assert!(symbol.is_function(ox + dx, oy + dy));
            }
        }
    }

    // Separator rings (clipped to the grid) are light function cells
    let separators: Vec<(usize, usize)> = (0..8)
        .flat_map(|i| {
            [
                (7, i),
                (i, 7),
                (13, i),
                (13 + i, 7),
                (i, 13),
                (7, 13 + i),
            ]
        })
        .collect();
    for (x, y) in separators {
        assert!(!symbol.is_dark(x, y), "separator ({}, {}) is dark", x, y);
        assert!(symbol.is_function(x, y));
    }
}

#[test]
fn test_scenario_e_committed_mask_is_minimal() {
    let payload = b"http://localhost:8080";
    let symbol = encode_bytes(payload).unwrap();
    assert_eq!(symbol.version().number(), 2);
    assert!(symbol.mask().index() <= 7);

    let (modules, function, _, _) = unmasked_grid(payload);
    let scores: Vec<u32> = MaskPattern::ALL
        .iter()
        .map(|&m| {
            let mut copy = modules.clone();
            apply_mask(&mut copy, m, &function);
            row_run_penalty(&copy)
        })
        .collect();

    let chosen = symbol.mask().index();
    let min = *scores.iter().min().unwrap();
    assert_eq!(scores[chosen], min);
    // Ties resolve to the lowest index
    assert_eq!(scores.iter().position(|&s| s == min), Some(chosen));
}

#[test]
fn test_size_formula() {
    for n in 1..=10u8 {
        let v = Version::new(n).unwrap();
        assert_eq!(v.size(), 21 + 4 * (n as usize - 1));
    }
}

#[test]
fn test_sizer_boundaries_all_lengths() {
    for len in 0..=300usize {
        match select_version(len) {
            Ok(_) => assert!(len + 3 <= 271),
            Err(_) => assert!(len + 3 > 271),
        }
    }
}

#[test]
fn test_function_cells_survive_data_and_mask() {
    let payload = b"function cells are never touched";
    let (version, level) = select_version(payload.len()).unwrap();
    let size = version.size();
    let mut modules = BitMatrix::square(size);
    let mut function = BitMatrix::square(size);
    PatternPlacer::new(&mut modules, &mut function).place_all(version);
    let snapshot = modules.clone();

    place_data(&mut modules, &function, &encode_for(payload, version, level));
    for m in MaskPattern::ALL {
        apply_mask(&mut modules, m, &function);
    }

    for y in 0..size {
        for x in 0..size {
            if function.get(x, y) {
                assert_eq!(modules.get(x, y), snapshot.get(x, y), "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_mask_involution_on_real_grid() {
    let (modules, function, _, _) = unmasked_grid(b"involution check");
    for m in MaskPattern::ALL {
        let mut copy = modules.clone();
        apply_mask(&mut copy, m, &function);
        assert_ne!(copy, modules, "mask {} changed nothing", m.index());
        apply_mask(&mut copy, m, &function);
        assert_eq!(copy, modules, "mask {} is not an involution", m.index());
    }
}

#[test]
fn test_determinism_across_versions() {
    for len in [1usize, 10, 40, 100, 200, 268] {
        let payload = "a".repeat(len);
        let a = encode(&payload).unwrap();
        let b = encode(&payload).unwrap();
        assert_eq!(a.modules(), b.modules());
        assert_eq!(a.function_modules(), b.function_modules());
        assert_eq!(a.mask(), b.mask());
    }
}

#[test]
fn test_grids_match_size_for_every_version() {
    // One payload length per version at level L boundaries
    for len in [14usize, 29, 50, 75, 103, 131, 151, 189, 227, 268] {
        let symbol = encode(&"z".repeat(len)).unwrap();
        let size = symbol.size();
        assert_eq!(symbol.modules().width(), size);
        assert_eq!(symbol.modules().height(), size);
        assert_eq!(symbol.function_modules().width(), size);
        assert_eq!(symbol.function_modules().height(), size);
        assert!(symbol.is_dark(8, size - 8));
        assert_eq!(symbol.rows().count(), size);
    }
}

#[test]
fn test_new_then_generate_matches_encode() {
    let staged = Symbol::new("staged").and_then(Symbol::generate).unwrap();
    let direct = encode("staged").unwrap();
    assert_eq!(staged.modules(), direct.modules());
}
