//! Face colors and their packed persistence format.

/// One color byte in 2-bit-per-channel ARGB order, alpha in the top bits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color(u8);

impl Color {
    pub const BLACK: Color = Color(0b1100_0000);
    pub const WHITE: Color = Color(0b1111_1111);

    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    pub const fn byte(self) -> u8 {
        self.0
    }
}

/// Key the host's key-value store keeps the palette blob under.
pub const SETTINGS_KEY: u32 = 1;

/// Packed palette blob size: one byte per color, no padding.
pub const PALETTE_BLOB_BYTES: usize = 2;

/// The two persisted face colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Palette {
    /// White digits on a black face.
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }
}

impl Palette {
    /// Packs the palette as `[background, foreground]`.
    pub const fn encode(self) -> [u8; PALETTE_BLOB_BYTES] {
        [self.background.byte(), self.foreground.byte()]
    }

    /// Reads a palette back from its packed form.
    pub const fn decode(blob: [u8; PALETTE_BLOB_BYTES]) -> Self {
        Self {
            background: Color::from_byte(blob[0]),
            foreground: Color::from_byte(blob[1]),
        }
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    /// `Ok(None)` when nothing has been saved yet; callers fall back to
    /// [`Palette::default`] locally.
    fn load(&mut self) -> Result<Option<Palette>, Self::Error>;

    fn save(&mut self, palette: &Palette) -> Result<(), Self::Error>;
}
