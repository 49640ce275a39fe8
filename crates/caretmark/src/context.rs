//! The rendering context owning map, default color, and device.

use std::io::Result;

use caretcon::Device;

use crate::color::{ColorMap, ConsoleColor};
use crate::token::Layer;

/// A rendering context.
///
/// The context bundles everything a render call needs beyond the markup
/// itself: the [`ColorMap`] resolving digits to colors, the default color
/// that reset directives restore, and the [`Device`] whose attribute the
/// directives drive. It is plain, caller-owned state; creating two contexts
/// over two devices keeps their colors fully independent.
#[derive(Debug)]
pub struct Context<D> {
    map: ColorMap,
    default_color: ConsoleColor,
    device: D,
}

impl<D: Device> Context<D> {
    /// Create a new context with the default color map.
    ///
    /// The default color, restored by `^!` and `*:`, starts out white.
    pub fn new(device: D) -> Self {
        Self::with_map(device, ColorMap::default())
    }

    /// Create a new context with the given color map.
    pub fn with_map(device: D, map: ColorMap) -> Self {
        Self {
            map,
            default_color: ConsoleColor::White,
            device,
        }
    }

    /// Get the default color.
    pub fn default_color(&self) -> ConsoleColor {
        self.default_color
    }

    /// Set the default color.
    pub fn set_default_color(&mut self, color: ConsoleColor) {
        self.default_color = color;
    }

    /// Get the color map.
    pub fn map(&self) -> &ColorMap {
        &self.map
    }

    /// Get the device.
    pub fn device(&mut self) -> &mut D {
        &mut self.device
    }

    /// Set the given layer to the color named by the index.
    ///
    /// The index is resolved through the color map and written into the
    /// layer's attribute nibble; the other layer's nibble is preserved.
    pub fn set_color(&mut self, layer: Layer, index: u8) -> Result<()> {
        let color = self.map.color(index)?;
        self.apply(layer, color)
    }

    /// Reset the given layer to the default color.
    pub fn reset_color(&mut self, layer: Layer) -> Result<()> {
        let color = self.default_color;
        self.apply(layer, color)
    }

    fn apply(&mut self, layer: Layer, color: ConsoleColor) -> Result<()> {
        let attribute = self.device.attribute()?;
        let attribute = match layer {
            Layer::Foreground => attribute.with_foreground(color.nibble()),
            Layer::Background => attribute.with_background(color.nibble()),
        };
        self.device.set_attribute(attribute)
    }
}

#[cfg(test)]
mod test {
    use super::Context;
    use crate::color::ConsoleColor;
    use crate::format::test_util::RecordingDevice;
    use crate::token::Layer;
    use caretcon::Attribute;

    #[test]
    fn test_set_color_preserves_other_nibble() {
        let device = RecordingDevice::new(Attribute::new(0x0023));
        let mut context = Context::new(device);

        // Default map: index 8 is the base red, nibble 0x4.
        context
            .set_color(Layer::Foreground, 8)
            .expect("set-foreground succeeds");
        assert_eq!(context.device().writes(), &[Attribute::new(0x0024)]);

        context
            .set_color(Layer::Background, 8)
            .expect("set-background succeeds");
        assert_eq!(
            context.device().writes(),
            &[Attribute::new(0x0024), Attribute::new(0x0044)]
        );
    }

    #[test]
    fn test_reset_uses_default_color() {
        let device = RecordingDevice::new(Attribute::new(0x00c1));
        let mut context = Context::new(device);
        context.set_default_color(ConsoleColor::Yellow);

        context
            .reset_color(Layer::Foreground)
            .expect("reset succeeds");
        assert_eq!(context.device().writes(), &[Attribute::new(0x00c6)]);
    }
}
