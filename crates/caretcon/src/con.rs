use std::io::Result;

use crate::api::Device;
use crate::attr::Attribute;
use crate::sys::RawConsole;

/// The process's controlling console.
///
/// A console owns a connection to the platform's console device and exposes
/// it through the [`Device`] trait. Opening the console does not modify its
/// state; only [`set_attribute`](Device::set_attribute) does. Applications
/// that intend to restore the console on exit should prefer [`Session`],
/// which does exactly that.
#[derive(Debug)]
pub struct Console {
    raw: RawConsole,
}

impl Console {
    /// Open a connection to the controlling console.
    ///
    /// On Windows, this opens `CONOUT$`; on Unix, `/dev/tty`. The operation
    /// fails when the process has no controlling console, e.g., when running
    /// detached or under a test harness without a pty.
    pub fn open() -> Result<Self> {
        Ok(Self {
            raw: RawConsole::open()?,
        })
    }
}

impl Device for Console {
    fn attribute(&self) -> Result<Attribute> {
        self.raw.read_attribute().map(Attribute::new)
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        self.raw.write_attribute(attribute.value())
    }
}

/// A console session that restores the original attribute.
///
/// Connecting a session opens the [`Console`] and reads its attribute once.
/// Dropping the session writes that attribute back, which also covers early
/// returns and error paths. Since the session owns the console, restoration
/// happens exactly once, no matter how many renderers used the session in
/// between.
#[derive(Debug)]
pub struct Session {
    console: Console,
    original: Attribute,
}

impl Session {
    /// Connect to the controlling console.
    pub fn connect() -> Result<Self> {
        let console = Console::open()?;
        let original = console.attribute()?;
        Ok(Self { console, original })
    }

    /// Get the attribute the console had when this session connected.
    pub fn original(&self) -> Attribute {
        self.original
    }

    /// Restore the original attribute without ending the session.
    pub fn restore(&mut self) -> Result<()> {
        self.console.set_attribute(self.original)
    }
}

impl Device for Session {
    fn attribute(&self) -> Result<Attribute> {
        self.console.attribute()
    }

    fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
        self.console.set_attribute(attribute)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Nothing to be done about a failing restore during drop.
        let _ = self.restore();
    }
}
