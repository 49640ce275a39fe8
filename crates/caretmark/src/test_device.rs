//! Fake devices for exercising renderers without a console.
//!
//! Unit tests and doc tests need a [`Device`] that works without a
//! controlling console and whose attribute writes can be inspected after the
//! fact. [`RecordingDevice`] is that device.

use std::cell::Cell;
use std::io::Result;

use caretcon::{Attribute, Device};

/// A fake console-attribute device recording every write.
///
/// The device starts out with the default white-on-black attribute unless
/// constructed with [`RecordingDevice::new`]. It also counts attribute
/// reads, which lets tests assert that a render performed no device calls
/// at all.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    attribute: Cell<Attribute>,
    reads: Cell<usize>,
    writes: Vec<Attribute>,
}

impl RecordingDevice {
    /// Create a new device with the given starting attribute.
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute: Cell::new(attribute),
            reads: Cell::new(0),
            writes: Vec::new(),
        }
    }

    /// Get all recorded attribute writes in order.
    pub fn writes(&self) -> &[Attribute] {
        &self.writes
    }

    /// Get the number of attribute reads.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Device for RecordingDevice {
    fn attribute(&self) -> Result<Attribute> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.attribute.get())
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        self.attribute.set(attribute);
        self.writes.push(attribute);
        Ok(())
    }
}
