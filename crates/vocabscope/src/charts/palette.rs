//! # Chart Colors

/// A named chart color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// The CSS color name.
    pub name: &'static str,

    /// The sRGB components.
    pub rgb: (u8, u8, u8),
}

/// CSS `FireBrick`.
pub const FIRE_BRICK: NamedColor = NamedColor {
    name: "FireBrick",
    rgb: (178, 34, 34),
};

/// CSS `DodgerBlue`.
pub const DODGER_BLUE: NamedColor = NamedColor {
    name: "DodgerBlue",
    rgb: (30, 144, 255),
};

/// CSS `DimGrey`.
pub const DIM_GREY: NamedColor = NamedColor {
    name: "DimGrey",
    rgb: (105, 105, 105),
};

/// Venn circle colors, by set index.
pub const VENN_PALETTE: [NamedColor; 3] = [FIRE_BRICK, DODGER_BLUE, DIM_GREY];

/// The color of Venn set `index`; the palette cycles.
pub fn venn_color(index: usize) -> NamedColor {
    VENN_PALETTE[index % VENN_PALETTE.len()]
}

/// Histogram series colors for the static backend.
///
/// These are the first entries of plotly's default colorway, so both
/// backends color the same series alike.
pub const SERIES_PALETTE: [NamedColor; 4] = [
    NamedColor {
        name: "#636efa",
        rgb: (0x63, 0x6e, 0xfa),
    },
    NamedColor {
        name: "#EF553B",
        rgb: (0xef, 0x55, 0x3b),
    },
    NamedColor {
        name: "#00cc96",
        rgb: (0x00, 0xcc, 0x96),
    },
    NamedColor {
        name: "#ab63fa",
        rgb: (0xab, 0x63, 0xfa),
    },
];

/// The color of histogram series `index`; the palette cycles.
pub fn series_color(index: usize) -> NamedColor {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
