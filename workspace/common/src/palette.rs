use serde::{Deserialize, Serialize};

/// The ten chart colours, in assignment order.
pub const VIVID: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B59B6", "#3498DB",
    "#E74C3C", "#2ECC71",
];

pub const SINGLE: [&str; 1] = ["#3498DB"];

/// Fixed ordered list of colours. Lookups past the end wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [&'static str]);

impl Palette {
    pub const VIVID: Palette = Palette(&VIVID);
    pub const SINGLE: Palette = Palette(&SINGLE);

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn color(&self, index: usize) -> &'static str {
        self.0[index % self.0.len()]
    }

    /// One colour per item, restarting from the first colour when exhausted.
    pub fn cycle(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| self.color(i).to_string()).collect()
    }
}

/// Named palette set. Line and pie colours never change; `single` only
/// switches bar charts to one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaletteChoice {
    #[default]
    Multi,
    Single,
}

impl PaletteChoice {
    pub fn bar(self) -> Palette {
        match self {
            PaletteChoice::Multi => Palette::VIVID,
            PaletteChoice::Single => Palette::SINGLE,
        }
    }

    pub fn pie(self) -> Palette {
        Palette::VIVID
    }

    pub fn line(self) -> &'static str {
        Palette::VIVID.color(0)
    }

    /// Parse a settings value, case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "multi" => Some(PaletteChoice::Multi),
            "single" => Some(PaletteChoice::Single),
            _ => None,
        }
    }
}

/// `#RRGGBB` plus an alpha byte, e.g. `with_alpha("#FF6B6B", 0x33)`.
pub fn with_alpha(color: &str, alpha: u8) -> String {
    format!("{color}{alpha:02X}")
}
