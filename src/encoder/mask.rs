/// Mask application and selection
use crate::debug::debug_log;
use crate::models::{BitMatrix, MaskPattern};

/// XOR the mask pattern into every non-function module. Applying the same mask
/// twice restores the original grid.
pub fn apply_mask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, function: &BitMatrix) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !function.get(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Row-run penalty: every horizontal run of five or more identical modules
/// scores `3 + (len - 5)`.
pub fn penalty_score(matrix: &BitMatrix) -> u32 {
    let mut penalty = 0;

    for y in 0..matrix.height() {
        let mut run = 1u32;
        for x in 1..matrix.width() {
            if matrix.get(x, y) == matrix.get(x - 1, y) {
                run += 1;
            } else {
                penalty += run_penalty(run);
                run = 1;
            }
        }
        penalty += run_penalty(run);
    }

    penalty
}

fn run_penalty(run: u32) -> u32 {
    if run >= 5 { 3 + (run - 5) } else { 0 }
}

/// Score a candidate mask on a scratch copy, leaving `matrix` untouched
pub fn score_mask(matrix: &BitMatrix, mask_pattern: MaskPattern, function: &BitMatrix) -> u32 {
    let mut scratch = matrix.clone();
    apply_mask(&mut scratch, mask_pattern, function);
    penalty_score(&scratch)
}

/// Pick the mask with the lowest penalty; ties keep the lowest index
pub fn select_mask(matrix: &BitMatrix, function: &BitMatrix) -> MaskPattern {
    let mut best = MaskPattern::Pattern0;
    let mut best_penalty = u32::MAX;

    for mask_pattern in MaskPattern::ALL {
        let penalty = score_mask(matrix, mask_pattern, function);
        debug_log!("mask {} penalty {}", mask_pattern.index(), penalty);
        if penalty < best_penalty {
            best_penalty = penalty;
            best = mask_pattern;
        }
    }

    best
}
