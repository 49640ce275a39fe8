use std::io::Result;

use crate::attr::Attribute;

/// A console-attribute device.
///
/// A device holds one current text [`Attribute`] and supports exactly two
/// operations, reading that attribute and replacing it. Everything else about
/// colored output, including which nibble of the attribute to update and how
/// to map color names onto nibbles, is the business of higher layers.
///
/// This trait is object-safe.
pub trait Device {
    /// Get the device's current attribute.
    fn attribute(&self) -> Result<Attribute>;

    /// Set the device's current attribute.
    fn set_attribute(&mut self, attribute: Attribute) -> Result<()>;
}

/// A mutably borrowed device is a device.
impl<D: Device + ?Sized> Device for &mut D {
    fn attribute(&self) -> Result<Attribute> {
        (**self).attribute()
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        (**self).set_attribute(attribute)
    }
}

/// A boxed device is a device.
impl<D: Device + ?Sized> Device for Box<D> {
    fn attribute(&self) -> Result<Attribute> {
        (**self).attribute()
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        (**self).set_attribute(attribute)
    }
}

fn _assert_traits_are_object_safe() {
    fn is_object_safe<T: ?Sized>() {}

    is_object_safe::<dyn Device>();
}
