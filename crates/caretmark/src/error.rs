//! Utility module with caretmark's errors.

/// A color index outside the 16 slots.
///
/// Markup strings cannot produce this error, since a hexadecimal digit always
/// names a valid slot. It surfaces only when Rust code hands a raw `u8` to
/// [`ColorMap::color`](crate::ColorMap::color) or converts one into a
/// [`ConsoleColor`](crate::ConsoleColor). The payload is the offending index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRangeError(pub u8);

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "color index {} does not name one of the 16 slots",
            self.0
        ))
    }
}

impl std::error::Error for OutOfRangeError {}

impl From<OutOfRangeError> for std::io::Error {
    fn from(value: OutOfRangeError) -> Self {
        Self::new(std::io::ErrorKind::InvalidInput, value)
    }
}

// ====================================================================================================================

/// An erroneous color map.
///
/// A [`ColorMap`](crate::ColorMap) must cover all 16 color slots exactly
/// once. A map violating that invariant is a configuration error, caught when
/// the map is built rather than when a markup string happens to name the
/// broken slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMapError {
    /// An entry names a slot outside `0..=15`.
    UnknownSlot(u8),
    /// Two entries name the same slot.
    DuplicateSlot(u8),
    /// No entry names the slot.
    MissingSlot(u8),
}

impl std::fmt::Display for ColorMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorMapError::*;

        match self {
            UnknownSlot(slot) => {
                f.write_fmt(format_args!("color map entry names unknown slot {}", slot))
            }
            DuplicateSlot(slot) => {
                f.write_fmt(format_args!("color map names slot {} more than once", slot))
            }
            MissingSlot(slot) => f.write_fmt(format_args!("color map is missing slot {}", slot)),
        }
    }
}

impl std::error::Error for ColorMapError {}
