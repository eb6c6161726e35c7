/// Symbol construction and the ordered generation pipeline
use crate::debug::debug_log;
use crate::encoder::bitstream::encode_for;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_patterns::PatternPlacer;
use crate::encoder::mask::{apply_mask, select_mask};
use crate::encoder::placement::place_data;
use crate::encoder::sizing::select_version;
use crate::error::EncodeError;
use crate::models::{BitMatrix, MaskPattern, Stage, Symbol};

impl Symbol {
    /// Validate the payload, size it, and allocate blank grids.
    pub fn new(payload: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let payload = payload.into();
        if payload.is_empty() {
            return Err(EncodeError::EmptyPayload);
        }

        let (version, error_level) = select_version(payload.len())?;
        debug_log!(
            "payload {} bytes -> version {} level {}",
            payload.len(),
            version,
            error_level
        );

        let size = version.size();
        Ok(Self {
            version,
            error_level,
            mask: MaskPattern::Pattern0,
            modules: BitMatrix::square(size),
            function: BitMatrix::square(size),
            payload,
            stage: Stage::Uninitialized,
        })
    }

    /// Run the full pipeline: patterns, data, mask, format info.
    ///
    /// A symbol that is already complete is returned unchanged.
    pub fn generate(mut self) -> Result<Self, EncodeError> {
        if self.is_complete() {
            return Ok(self);
        }
        self.check_grids()?;

        PatternPlacer::new(&mut self.modules, &mut self.function).place_all(self.version);
        self.stage = Stage::PatternsPlaced;

        let data = encode_for(&self.payload, self.version, self.error_level);
        self.stage = Stage::DataEncoded;

        place_data(&mut self.modules, &self.function, &data);
        self.stage = Stage::DataPlaced;

        self.mask = select_mask(&self.modules, &self.function);
        apply_mask(&mut self.modules, self.mask, &self.function);
        self.stage = Stage::Masked;
        debug_log!("committed mask {}", self.mask.index());

        FormatInfo::new(self.error_level, self.mask).embed(&mut self.modules, &mut self.function);
        self.stage = Stage::FormatEmbedded;

        Ok(self)
    }

    fn check_grids(&self) -> Result<(), EncodeError> {
        let expected = self.size();
        let square = |m: &BitMatrix| m.width() == expected && m.height() == expected;
        if square(&self.modules) && square(&self.function) {
            Ok(())
        } else {
            Err(EncodeError::GridMismatch {
                expected,
                modules: self.modules.height(),
                function: self.function.height(),
            })
        }
    }
}
