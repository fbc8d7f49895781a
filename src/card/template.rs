use image::Rgba;

/// Card presentation variant. Only affects how a card is drawn, never where or when.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTemplate {
    /// Tall card with a club-colored header and full detail grid.
    Classic,
    /// Shorter card with name, flag and stat only.
    Compact,
    /// Blue gradient header, stat band, detail grid and footer.
    #[default]
    Richest,
}

/// Fill colors used by the preview surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardPalette {
    /// Header band.
    pub header: Rgba<u8>,
    /// Card body.
    pub body: Rgba<u8>,
    /// Stat band.
    pub stat_band: Rgba<u8>,
}

impl CardTemplate {
    /// Card size in pixels (width, height).
    pub fn size(self) -> (f64, f64) {
        match self {
            Self::Classic => (600.0, 820.0),
            Self::Compact => (480.0, 420.0),
            Self::Richest => (600.0, 720.0),
        }
    }

    /// Height of the header band in pixels.
    pub fn header_height(self) -> f64 {
        match self {
            Self::Classic => 180.0,
            Self::Compact => 96.0,
            Self::Richest => 128.0,
        }
    }

    /// Whether the detail rows are drawn.
    pub fn shows_details(self) -> bool {
        !matches!(self, Self::Compact)
    }

    /// Preview colors.
    pub fn palette(self) -> CardPalette {
        match self {
            Self::Classic => CardPalette {
                header: Rgba([17, 17, 17, 255]),
                body: Rgba([250, 250, 250, 255]),
                stat_band: Rgba([229, 229, 229, 255]),
            },
            Self::Compact => CardPalette {
                header: Rgba([55, 65, 81, 255]),
                body: Rgba([255, 255, 255, 255]),
                stat_band: Rgba([243, 244, 246, 255]),
            },
            Self::Richest => CardPalette {
                header: Rgba([37, 99, 235, 255]),
                body: Rgba([255, 255, 255, 255]),
                stat_band: Rgba([239, 246, 255, 255]),
            },
        }
    }
}
