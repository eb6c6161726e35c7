use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

pub(crate) const DEFAULT_QUIET_ZONE: usize = 4;
pub(crate) const DEFAULT_MODULE_SCALE: u32 = 8;

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Quiet-zone width in modules (`QR_QUIET_ZONE`, 0-16)
pub(crate) fn quiet_zone() -> usize {
    *QUIET_ZONE
        .get_or_init(|| parse_env_usize("QR_QUIET_ZONE", DEFAULT_QUIET_ZONE).clamp(0, 16))
}

static MODULE_SCALE: OnceLock<u32> = OnceLock::new();

/// Pixels per module for image output (`QR_MODULE_SCALE`, 1-64)
pub(crate) fn module_scale() -> u32 {
    *MODULE_SCALE
        .get_or_init(|| parse_env_u32("QR_MODULE_SCALE", DEFAULT_MODULE_SCALE).clamp(1, 64))
}

/// Options shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Light border width in modules on every side
    pub quiet_zone: usize,
    /// Pixels per module (image output)
    pub module_scale: u32,
    /// Glyph for a dark module (terminal output)
    pub dark: String,
    /// Glyph for a light module (terminal output)
    pub light: String,
}

impl RenderOptions {
    /// Override the quiet-zone width
    pub fn with_quiet_zone(mut self, quiet_zone: usize) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Override the pixel scale, at least 1
    pub fn with_module_scale(mut self, module_scale: u32) -> Self {
        self.module_scale = module_scale.max(1);
        self
    }

    /// Override the terminal glyphs
    pub fn with_glyphs(mut self, dark: impl Into<String>, light: impl Into<String>) -> Self {
        self.dark = dark.into();
        self.light = light.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            quiet_zone: quiet_zone(),
            module_scale: module_scale(),
            dark: "██".to_string(),
            light: "  ".to_string(),
        }
    }
}
