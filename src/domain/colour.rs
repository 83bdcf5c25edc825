const MIN_BRIGHTNESS: f64 = 0.35;
const MIN_SATURATION: f64 = 0.20;
const INDEX_BIAS: f64 = 5.0;

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub rgb: Rgb,
    pub brightness: f64,
    pub saturation: f64,
}

impl PaletteEntry {
    /// Returns `None` for pure black, whose saturation is undefined.
    #[must_use]
    pub fn new(rgb: Rgb) -> Option<Self> {
        let (r, g, b) = rgb;
        let max = r.max(g).max(b);
        if max == 0 {
            return None;
        }
        let min = r.min(g).min(b);

        Some(Self {
            rgb,
            brightness: (f64::from(r) * 0.299 + f64::from(g) * 0.587 + f64::from(b) * 0.114)
                / 255.0,
            saturation: 1.0 - f64::from(min) / f64::from(max),
        })
    }

    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.brightness > MIN_BRIGHTNESS && self.saturation > MIN_SATURATION
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleColour {
    value: u32,
    name: String,
}

impl RoleColour {
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb;
        let value = [r, g, b]
            .into_iter()
            .fold(0u32, |acc, channel| (acc << 8) | u32::from(channel));

        Self {
            value,
            name: format!("#{value:06x}"),
        }
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Picks the vivid, well lit colour that appears earliest in the palette.
/// Returns `None` when nothing passes the brightness and saturation filter.
#[must_use]
pub fn select(palette: &[Rgb]) -> Option<RoleColour> {
    palette
        .iter()
        .filter_map(|&rgb| PaletteEntry::new(rgb))
        .filter(PaletteEntry::is_eligible)
        .enumerate()
        .map(|(i, entry)| {
            let score = (i as f64 + INDEX_BIAS) / (entry.brightness * entry.saturation);
            (entry, score)
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(entry, _)| RoleColour::from_rgb(entry.rgb))
}
