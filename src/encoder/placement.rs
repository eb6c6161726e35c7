/// Data placement into the module grid following the zigzag pattern
use crate::models::BitMatrix;

/// Visit every non-function cell in placement order.
///
/// Column pairs run right to left, starting upward; the timing column (6) is
/// stepped over without flipping direction. Within a row the right column of
/// the pair comes first.
pub fn for_each_data_cell(function: &BitMatrix, mut visit: impl FnMut(usize, usize)) {
    let dimension = function.width();
    let mut upward = true;
    let mut col = dimension as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        for i in 0..dimension {
            let row = if upward { dimension - 1 - i } else { i };
            for c in [col, col - 1] {
                let x = c as usize;
                if !function.get(x, row) {
                    visit(x, row);
                }
            }
        }

        upward = !upward;
        col -= 2;
    }
}

/// Write `data` MSB-first into the data cells; cells past the end of the stream
/// are set light.
pub fn place_data(modules: &mut BitMatrix, function: &BitMatrix, data: &[u8]) {
    let total_bits = data.len() * 8;
    let mut bit_index = 0;

    for_each_data_cell(function, |x, y| {
        let bit = if bit_index < total_bits {
            let byte = data[bit_index / 8];
            let bit = (byte >> (7 - bit_index % 8)) & 1 == 1;
            bit_index += 1;
            bit
        } else {
            false
        };
        modules.set(x, y, bit);
    });
}

/// Read the data cells back in placement order
pub fn read_data_bits(modules: &BitMatrix, function: &BitMatrix) -> Vec<bool> {
    let mut bits = Vec::new();
    for_each_data_cell(function, |x, y| bits.push(modules.get(x, y)));
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::PatternPlacer;
    use crate::models::Version;

    fn function_grid(version: Version) -> (BitMatrix, BitMatrix) {
        let mut modules = BitMatrix::square(version.size());
        let mut function = BitMatrix::square(version.size());
        PatternPlacer::new(&mut modules, &mut function).place_all(version);
        (modules, function)
    }

    #[test]
    fn test_traversal_starts_bottom_right() {
        let (_, function) = function_grid(Version::MIN);
        let mut order = Vec::new();
        for_each_data_cell(&function, |x, y| order.push((x, y)));
        assert_eq!(&order[..4], &[(20, 20), (19, 20), (20, 19), (19, 19)]);
    }

    #[test]
    fn test_direction_flips_per_pair() {
        let (_, function) = function_grid(Version::MIN);
        let mut order = Vec::new();
        for_each_data_cell(&function, |x, y| order.push((x, y)));
        // Second pair (18, 17) runs top to bottom; its first free cell is below the
        // top-right separator
        let first_in_pair = order.iter().find(|(x, _)| *x == 18).unwrap();
        assert_eq!(*first_in_pair, (18, 8));
    }

    #[test]
    fn test_timing_column_skipped() {
        let (_, function) = function_grid(Version::MIN);
        let mut visited = BitMatrix::square(21);
        for_each_data_cell(&function, |x, y| {
            assert!(!visited.get(x, y), "visited ({}, {}) twice", x, y);
            visited.set(x, y, true);
        });
        // Every non-function cell is visited exactly once
        for y in 0..21 {
            for x in 0..21 {
                assert_eq!(visited.get(x, y), !function.get(x, y), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_place_then_read_back() {
        let (mut modules, function) = function_grid(Version::new(2).unwrap());
        let snapshot = modules.clone();
        let data = [0b1010_0000u8, 0xFF];
        place_data(&mut modules, &function, &data);

        let bits = read_data_bits(&modules, &function);
        assert_eq!(&bits[..8], &[true, false, true, false, false, false, false, false]);
        assert!(bits[8..16].iter().all(|&b| b));
        assert!(bits[16..].iter().all(|&b| !b));

        // Function cells keep their pattern values
        for y in 0..25 {
            for x in 0..25 {
                if function.get(x, y) {
                    assert_eq!(modules.get(x, y), snapshot.get(x, y));
                }
            }
        }
    }
}
