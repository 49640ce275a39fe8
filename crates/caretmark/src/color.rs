//! The 16 console colors and the digit-to-color map.

use crate::error::{ColorMapError, OutOfRangeError};

/// The number of color slots in a map.
const SLOT_COUNT: usize = 16;

/// The 16 console colors.
///
/// The discriminant of each variant is its attribute nibble, following the
/// classic console palette: bit 0 is blue, bit 1 is green, bit 2 is red, and
/// bit 3 selects the bright half. Rust code converts between nibbles and
/// variants with [`ConsoleColor as
/// TryFrom<u8>`](enum.ConsoleColor.html#impl-TryFrom%3Cu8%3E-for-ConsoleColor)
/// and [`u8 as
/// From<ConsoleColor>`](enum.ConsoleColor.html#impl-From%3CConsoleColor%3E-for-u8).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsoleColor {
    #[default]
    Black,
    Blue,
    Green,
    Aqua,
    Red,
    Purple,
    Yellow,
    White,
    Gray,
    LightBlue,
    LightGreen,
    LightAqua,
    LightRed,
    LightPurple,
    LightYellow,
    BrightWhite,
}

impl ConsoleColor {
    /// All console colors in nibble order.
    const ALL: [Self; SLOT_COUNT] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::Purple,
        Self::Yellow,
        Self::White,
        Self::Gray,
        Self::LightBlue,
        Self::LightGreen,
        Self::LightAqua,
        Self::LightRed,
        Self::LightPurple,
        Self::LightYellow,
        Self::BrightWhite,
    ];

    /// Get an iterator over all console colors in nibble order.
    pub fn all() -> impl Iterator<Item = ConsoleColor> {
        Self::ALL.into_iter()
    }

    /// Get the attribute nibble for this color.
    pub const fn nibble(&self) -> u8 {
        *self as u8
    }

    /// Determine whether this color is from the bright half of the palette.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }
}

impl TryFrom<u8> for ConsoleColor {
    type Error = OutOfRangeError;

    /// Instantiate a console color from its attribute nibble.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(OutOfRangeError(value))
    }
}

impl From<ConsoleColor> for u8 {
    /// Get the attribute nibble for the console color.
    fn from(value: ConsoleColor) -> Self {
        value as u8
    }
}

// ====================================================================================================================

/// A total map from color indices to console colors.
///
/// Markup strings name colors by hexadecimal digit, and the map decides which
/// console color each of the 16 digits stands for. A map must cover every
/// slot exactly once; [`ColorMap::new`] enforces that invariant when the map
/// is built, so lookups during a scan cannot stumble over a hole.
///
/// The default map assigns the commonly used light colors to the low digits
/// `1`–`7`, the base colors to `8`–`e`, and black to `0`:
///
/// | Index | Color        | Index | Color    |
/// |-------|--------------|-------|----------|
/// | `0`   | Black        | `8`   | Red      |
/// | `1`   | LightRed     | `9`   | Green    |
/// | `2`   | LightGreen   | `a`   | Yellow   |
/// | `3`   | LightYellow  | `b`   | Blue     |
/// | `4`   | LightBlue    | `c`   | Aqua     |
/// | `5`   | LightAqua    | `d`   | Purple   |
/// | `6`   | LightPurple  | `e`   | Gray     |
/// | `7`   | BrightWhite  | `f`   | White    |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorMap {
    slots: [ConsoleColor; SLOT_COUNT],
}

impl ColorMap {
    /// Create a new color map from the given entries.
    ///
    /// The entries must name every slot `0..=15` exactly once. Otherwise,
    /// this method fails with the first unknown, duplicated, or missing slot.
    pub fn new(
        entries: impl IntoIterator<Item = (u8, ConsoleColor)>,
    ) -> Result<Self, ColorMapError> {
        let mut slots: [Option<ConsoleColor>; SLOT_COUNT] = [None; SLOT_COUNT];

        for (index, color) in entries {
            let slot = slots
                .get_mut(index as usize)
                .ok_or(ColorMapError::UnknownSlot(index))?;
            if slot.replace(color).is_some() {
                return Err(ColorMapError::DuplicateSlot(index));
            }
        }

        let mut table = [ConsoleColor::Black; SLOT_COUNT];
        for (index, slot) in slots.iter().enumerate() {
            table[index] = slot.ok_or(ColorMapError::MissingSlot(index as u8))?;
        }

        Ok(Self { slots: table })
    }

    /// Look up the console color for the given index.
    pub fn color(&self, index: u8) -> Result<ConsoleColor, OutOfRangeError> {
        self.slots
            .get(index as usize)
            .copied()
            .ok_or(OutOfRangeError(index))
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        use ConsoleColor::*;

        Self {
            slots: [
                Black,
                LightRed,
                LightGreen,
                LightYellow,
                LightBlue,
                LightAqua,
                LightPurple,
                BrightWhite,
                Red,
                Green,
                Yellow,
                Blue,
                Aqua,
                Purple,
                Gray,
                White,
            ],
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ColorMap, ConsoleColor};
    use crate::error::{ColorMapError, OutOfRangeError};

    #[test]
    fn test_nibbles() {
        assert_eq!(ConsoleColor::Black.nibble(), 0x0);
        assert_eq!(ConsoleColor::White.nibble(), 0x7);
        assert_eq!(ConsoleColor::LightRed.nibble(), 0xc);
        assert_eq!(ConsoleColor::BrightWhite.nibble(), 0xf);

        assert!(!ConsoleColor::White.is_bright());
        assert!(ConsoleColor::Gray.is_bright());

        assert_eq!(ConsoleColor::all().count(), 16);
        for (nibble, color) in ConsoleColor::all().enumerate() {
            assert_eq!(color.nibble(), nibble as u8);
            assert_eq!(ConsoleColor::try_from(color.nibble()), Ok(color));
        }
        assert_eq!(ConsoleColor::try_from(16), Err(OutOfRangeError(16)));
    }

    #[test]
    fn test_default_map_is_total() {
        let map = ColorMap::default();
        for index in 0..16 {
            assert!(map.color(index).is_ok(), "slot {} must be mapped", index);
        }
        assert_eq!(map.color(0), Ok(ConsoleColor::Black));
        assert_eq!(map.color(1), Ok(ConsoleColor::LightRed));
        assert_eq!(map.color(15), Ok(ConsoleColor::White));
        assert!(map.color(16).is_err());
    }

    #[test]
    fn test_incomplete_map() {
        let entries = (0..15).map(|index| (index, ConsoleColor::Black));
        assert_eq!(
            ColorMap::new(entries).expect_err("a 15-entry map must be rejected"),
            ColorMapError::MissingSlot(15)
        );
    }

    #[test]
    fn test_duplicate_slot() {
        let entries = (0..16)
            .map(|index| (index, ConsoleColor::Black))
            .chain(std::iter::once((7, ConsoleColor::White)));
        assert_eq!(
            ColorMap::new(entries).expect_err("a doubled slot must be rejected"),
            ColorMapError::DuplicateSlot(7)
        );
    }

    #[test]
    fn test_unknown_slot() {
        let entries = std::iter::once((16, ConsoleColor::Black));
        assert_eq!(
            ColorMap::new(entries).expect_err("slot 16 must be rejected"),
            ColorMapError::UnknownSlot(16)
        );
    }

    #[test]
    fn test_complete_map() {
        let entries = ConsoleColor::all().map(|color| (color.nibble(), color));
        let map = ColorMap::new(entries).expect("identity map covers all slots");
        assert_eq!(map.color(4), Ok(ConsoleColor::Red));
    }
}
