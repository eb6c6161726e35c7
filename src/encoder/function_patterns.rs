/// Structural pattern placement (finder, separator, timing, alignment)
use crate::encoder::tables::alignment_pattern_positions;
use crate::models::{BitMatrix, Version};

// 7x7 finder: dark border, light ring, dark 3x3 core
const FINDER_PATTERN: [[bool; 7]; 7] = [
    [true, true, true, true, true, true, true],
    [true, false, false, false, false, false, true],
    [true, false, true, true, true, false, true],
    [true, false, true, true, true, false, true],
    [true, false, true, true, true, false, true],
    [true, false, false, false, false, false, true],
    [true, true, true, true, true, true, true],
];

/// Writes function patterns into a module grid, marking each touched cell in the
/// parallel function grid.
pub struct PatternPlacer<'a> {
    modules: &'a mut BitMatrix,
    function: &'a mut BitMatrix,
    size: usize,
}

impl<'a> PatternPlacer<'a> {
    /// Wrap a module grid and its function grid (both square)
    pub fn new(modules: &'a mut BitMatrix, function: &'a mut BitMatrix) -> Self {
        let size = modules.width();
        Self {
            modules,
            function,
            size,
        }
    }

    /// Draw every structural pattern for `version`
    pub fn place_all(&mut self, version: Version) {
        self.place_finder_patterns();
        self.place_separators();
        self.place_timing_patterns();
        self.place_alignment_patterns(version);
    }

    fn finder_origins(&self) -> [(usize, usize); 3] {
        [(0, 0), (self.size - 7, 0), (0, self.size - 7)]
    }

    /// 7x7 finders at the top-left, top-right and bottom-left corners
    pub fn place_finder_patterns(&mut self) {
        for (ox, oy) in self.finder_origins() {
            for (dy, row) in FINDER_PATTERN.iter().enumerate() {
                for (dx, &dark) in row.iter().enumerate() {
                    self.set_function(ox + dx, oy + dy, dark);
                }
            }
        }
    }

    /// Light one-module ring around each finder, clipped to the grid
    pub fn place_separators(&mut self) {
        for (ox, oy) in self.finder_origins() {
            for dy in -1..=7isize {
                for dx in -1..=7isize {
                    let on_ring = dx == -1 || dx == 7 || dy == -1 || dy == 7;
                    if !on_ring {
                        continue;
                    }
                    let x = ox as isize + dx;
                    let y = oy as isize + dy;
                    if x >= 0 && y >= 0 {
                        self.set_function(x as usize, y as usize, false);
                    }
                }
            }
        }
    }

    /// Row 6 and column 6, dark on even indices, between the finders
    pub fn place_timing_patterns(&mut self) {
        for i in 8..self.size - 8 {
            let dark = i % 2 == 0;
            self.set_function(i, 6, dark);
            self.set_function(6, i, dark);
        }
    }

    /// 5x5 alignment patterns at every tabulated center clear of the finders
    pub fn place_alignment_patterns(&mut self, version: Version) {
        let centers = alignment_pattern_positions(version);
        let far = self.size - 10;
        for &cy in centers {
            for &cx in centers {
                // Skip the three finder corners
                let in_tl = cx <= 10 && cy <= 10;
                let in_tr = cx >= far && cy <= 10;
                let in_bl = cx <= 10 && cy >= far;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                for dy in -2..=2isize {
                    for dx in -2..=2isize {
                        let ring = dx.abs() == 2 || dy.abs() == 2;
                        let center = dx == 0 && dy == 0;
                        let x = cx as isize + dx;
                        let y = cy as isize + dy;
                        if x >= 0 && y >= 0 {
                            self.set_function(x as usize, y as usize, ring || center);
                        }
                    }
                }
            }
        }
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        if x < self.size && y < self.size {
            self.modules.set(x, y, dark);
            self.function.set(x, y, true);
        }
    }
}
