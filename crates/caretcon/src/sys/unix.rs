use std::cell::Cell;
use std::ffi::c_void;
use std::fs::OpenOptions;
use std::io::Result;
use std::os::fd::{AsRawFd, OwnedFd};

use super::RawHandle;

/// Convert the status returned by `libc::write` into the number of bytes
/// written, turning a negative status into the pending OS error.
fn written(status: libc::ssize_t) -> Result<usize> {
    if status < 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(status as usize)
    }
}

/// Map an attribute nibble onto its SGR parameter.
///
/// The nibble uses the console's IRGB bit order with blue in bit 0, whereas
/// SGR color parameters count red as 1. Bit 3 selects the bright variant,
/// which lives 60 parameters up from the base.
fn sgr_param(nibble: u8, base: u8) -> u8 {
    let index = (nibble & 0x1) << 2 | nibble & 0x2 | (nibble & 0x4) >> 2;
    if nibble & 0x8 == 0 {
        base + index
    } else {
        base + 60 + index
    }
}

/// The controlling console.
///
/// Unix terminals have no readable color attribute, so this implementation
/// shadows the attribute in process memory, starting from the default white
/// on black, and translates every attribute write into an SGR ANSI escape
/// sequence on `/dev/tty`.
#[derive(Debug)]
pub(crate) struct RawConsole {
    handle: OwnedFd,
    shadow: Cell<u16>,
}

impl RawConsole {
    /// Open a new owned connection to the console device.
    pub fn open() -> Result<Self> {
        let handle = OpenOptions::new().write(true).open("/dev/tty")?.into();

        Ok(Self {
            handle,
            shadow: Cell::new(0x0007),
        })
    }

    /// Read the current attribute.
    pub fn read_attribute(&self) -> Result<u16> {
        Ok(self.shadow.get())
    }

    /// Write a new attribute.
    pub fn write_attribute(&self, value: u16) -> Result<()> {
        let sequence = format!(
            "\x1b[{};{}m",
            sgr_param((value & 0xf) as u8, 30),
            sgr_param((value >> 4 & 0xf) as u8, 40),
        );
        self.write_all(sequence.as_bytes())?;
        self.shadow.set(value);
        Ok(())
    }

    fn write_all(&self, mut buf: &[u8]) -> Result<()> {
        let handle: RawHandle = self.handle.as_raw_fd();
        while !buf.is_empty() {
            // SAFETY: The file descriptor is owned and the buffer outlives the call.
            let count = written(unsafe {
                libc::write(handle, buf.as_ptr() as *const c_void, buf.len() as libc::size_t)
            })?;
            buf = &buf[count..];
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{sgr_param, written};

    #[test]
    fn test_written() {
        assert_eq!(written(5).expect("a nonnegative status is a byte count"), 5);
        assert!(written(-1).is_err());
    }

    #[test]
    fn test_sgr_param() {
        // White on black, i.e., the default attribute 0x0007.
        assert_eq!(sgr_param(0x7, 30), 37);
        assert_eq!(sgr_param(0x0, 40), 40);

        // The console nibble swaps red and blue relative to SGR.
        assert_eq!(sgr_param(0x1, 30), 34); // blue
        assert_eq!(sgr_param(0x4, 30), 31); // red

        // Bright variants.
        assert_eq!(sgr_param(0xc, 30), 91); // light red
        assert_eq!(sgr_param(0xf, 40), 107); // bright white
    }
}
