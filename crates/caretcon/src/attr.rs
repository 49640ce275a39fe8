/// The foreground nibble of an attribute.
const FOREGROUND_MASK: u16 = 0x000f;
/// The background nibble of an attribute.
const BACKGROUND_MASK: u16 = 0x00f0;

/// A console text attribute.
///
/// The attribute follows the layout of the Windows console: bits 0–3 name the
/// foreground color, bits 4–7 name the background color, and the remaining
/// bits are passed through unchanged. Each nibble indexes the console's
/// 16-color palette, with bit 3 of the nibble selecting the bright half.
///
/// The default attribute is white on black, i.e., `0x0007`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute(u16);

impl Attribute {
    /// Create a new attribute from its raw value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value of this attribute.
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Get the foreground nibble.
    pub const fn foreground(&self) -> u8 {
        (self.0 & FOREGROUND_MASK) as u8
    }

    /// Get the background nibble.
    pub const fn background(&self) -> u8 {
        ((self.0 & BACKGROUND_MASK) >> 4) as u8
    }

    /// Create a new attribute with the given foreground nibble.
    ///
    /// The background nibble and all other bits are preserved.
    #[must_use = "the method returns a new attribute and does not mutate this attribute"]
    pub const fn with_foreground(&self, nibble: u8) -> Self {
        Self(self.0 & !FOREGROUND_MASK | (nibble as u16 & FOREGROUND_MASK))
    }

    /// Create a new attribute with the given background nibble.
    ///
    /// The foreground nibble and all other bits are preserved.
    #[must_use = "the method returns a new attribute and does not mutate this attribute"]
    pub const fn with_background(&self, nibble: u8) -> Self {
        Self(self.0 & !BACKGROUND_MASK | ((nibble as u16) << 4 & BACKGROUND_MASK))
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self(0x0007)
    }
}

impl From<u16> for Attribute {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Attribute> for u16 {
    fn from(value: Attribute) -> Self {
        value.0
    }
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Attribute")
            .field(&format_args!("{:#06x}", self.0))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::Attribute;

    #[test]
    fn test_nibbles() {
        let attribute = Attribute::new(0x00c3);
        assert_eq!(attribute.foreground(), 0x3);
        assert_eq!(attribute.background(), 0xc);

        let attribute = attribute.with_foreground(0xf);
        assert_eq!(attribute.value(), 0x00cf);
        let attribute = attribute.with_background(0x0);
        assert_eq!(attribute.value(), 0x000f);
    }

    #[test]
    fn test_other_bits_preserved() {
        // Bit 8 is COMMON_LVB_LEADING_BYTE on Windows. Attribute updates must
        // leave bits beyond the two color nibbles alone.
        let attribute = Attribute::new(0x0107);
        assert_eq!(attribute.with_foreground(0x2).value(), 0x0102);
        assert_eq!(attribute.with_background(0x2).value(), 0x0127);
    }

    #[test]
    fn test_default() {
        assert_eq!(Attribute::default().value(), 0x0007);
        assert_eq!(Attribute::default().foreground(), 0x7);
        assert_eq!(Attribute::default().background(), 0x0);
    }
}
