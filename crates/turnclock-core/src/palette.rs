//! Color palettes.
//!
//! Palettes are plain RGB data so the renderer decides how to map them onto
//! the terminal. Options store only the palette name; resolution falls back
//! to the default palette when the name is unknown.

/// An RGB color triple, terminal-framework agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A resolved color set used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Catalog name this palette resolved from.
    pub name: &'static str,
    /// Panel and marker color for the player whose clock is running.
    pub active: Rgb,
    /// Panel color for waiting players.
    pub idle: Rgb,
    /// Highlight color for selections and the current phase.
    pub accent: Rgb,
    /// Color for destructive prompts and the confirm overlay.
    pub warning: Rgb,
    /// Primary text color.
    pub text: Rgb,
    /// Secondary text color (help bar, timestamps).
    pub dim: Rgb,
}

const DEFAULT: Palette = Palette {
    name: "default",
    active: Rgb(97, 175, 239),
    idle: Rgb(92, 99, 112),
    accent: Rgb(152, 195, 121),
    warning: Rgb(224, 108, 117),
    text: Rgb(220, 223, 228),
    dim: Rgb(128, 135, 148),
};

const SOLARIZED: Palette = Palette {
    name: "solarized",
    active: Rgb(38, 139, 210),
    idle: Rgb(88, 110, 117),
    accent: Rgb(133, 153, 0),
    warning: Rgb(220, 50, 47),
    text: Rgb(147, 161, 161),
    dim: Rgb(101, 123, 131),
};

const NORD: Palette = Palette {
    name: "nord",
    active: Rgb(136, 192, 208),
    idle: Rgb(76, 86, 106),
    accent: Rgb(163, 190, 140),
    warning: Rgb(191, 97, 106),
    text: Rgb(216, 222, 233),
    dim: Rgb(129, 140, 161),
};

const GRUVBOX: Palette = Palette {
    name: "gruvbox",
    active: Rgb(131, 165, 152),
    idle: Rgb(102, 92, 84),
    accent: Rgb(184, 187, 38),
    warning: Rgb(251, 73, 52),
    text: Rgb(235, 219, 178),
    dim: Rgb(146, 131, 116),
};

const CATALOG: [Palette; 4] = [DEFAULT, SOLARIZED, NORD, GRUVBOX];

impl Palette {
    /// Palette names in menu order.
    pub fn names() -> Vec<&'static str> {
        CATALOG.iter().map(|p| p.name).collect()
    }

    /// Looks up a palette by name, falling back to the default palette.
    pub fn resolve(name: &str) -> Palette {
        CATALOG
            .iter()
            .find(|p| p.name == name)
            .copied()
            .unwrap_or(DEFAULT)
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT
    }
}
