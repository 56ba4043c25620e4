//! ANSiFlags byte decoding.
//!
//! One packed byte carries three display hints in non-overlapping bit
//! ranges; bits above 4 are ignored.  Every bit pattern decodes to a value:
//! the `Invalid` variants are legal output, not errors.  Whether strict
//! consumers reject them is their call; the decoder passes them through.

use serde::Serialize;

/// Display hints unpacked from the record's flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnsiFlags {
    /// Bit 0: render iCE colors as stable background colors instead of
    /// blinking text.
    pub non_blink: bool,
    /// Bits 1–2.
    pub letter_spacing: LetterSpacing,
    /// Bits 3–4.
    pub aspect_ratio: AspectRatio,
}

impl AnsiFlags {
    pub fn from_byte(b: u8) -> Self {
        Self {
            non_blink: b & 1 == 1,
            letter_spacing: LetterSpacing::from_bits((b >> 1) & 0b11),
            aspect_ratio: AspectRatio::from_bits((b >> 3) & 0b11),
        }
    }
}

/// Font width hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LetterSpacing {
    #[default]
    Legacy,
    EightPixel,
    NinePixel,
    Invalid,
}

impl LetterSpacing {
    fn from_bits(v: u8) -> Self {
        match v & 0b11 {
            0 => LetterSpacing::Legacy,
            1 => LetterSpacing::EightPixel,
            2 => LetterSpacing::NinePixel,
            _ => LetterSpacing::Invalid,
        }
    }

    /// Human-readable name (for diagnostics only — never parsed).
    pub fn name(self) -> &'static str {
        match self {
            LetterSpacing::Legacy => "legacy",
            LetterSpacing::EightPixel => "8 pixel",
            LetterSpacing::NinePixel => "9 pixel",
            LetterSpacing::Invalid => "invalid",
        }
    }
}

/// Pixel aspect ratio hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AspectRatio {
    #[default]
    Legacy,
    /// Stretch on displays with square pixels.
    Stretch,
    /// Already square; no correction wanted.
    Square,
    Invalid,
}

impl AspectRatio {
    fn from_bits(v: u8) -> Self {
        match v & 0b11 {
            0 => AspectRatio::Legacy,
            1 => AspectRatio::Stretch,
            2 => AspectRatio::Square,
            _ => AspectRatio::Invalid,
        }
    }

    /// Human-readable name (for diagnostics only — never parsed).
    pub fn name(self) -> &'static str {
        match self {
            AspectRatio::Legacy => "legacy",
            AspectRatio::Stretch => "stretch",
            AspectRatio::Square => "square",
            AspectRatio::Invalid => "invalid",
        }
    }
}
