use std::fs::OpenOptions;
use std::io::Result;
use std::mem::MaybeUninit;
use std::os::windows::io::{AsRawHandle, OwnedHandle};

use windows_sys::Win32::Foundation::BOOL;
use windows_sys::Win32::System::Console;

use super::RawHandle;

/// Check the boolean status returned by a console API call, turning a zero
/// status into the pending OS error.
fn check(status: BOOL) -> Result<()> {
    if status == 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// The controlling console.
///
/// This implementation opens `CONOUT$`, i.e., the console's active screen
/// buffer, which remains meaningful even when standard output has been
/// redirected. The attribute lives in the screen buffer itself and hence can
/// be read back directly.
#[derive(Debug)]
pub(crate) struct RawConsole {
    handle: OwnedHandle,
}

impl RawConsole {
    /// Open a new owned connection to the console device.
    pub fn open() -> Result<Self> {
        let handle = OpenOptions::new()
            .read(true)
            .write(true)
            .open("CONOUT$")?
            .into();

        Ok(Self { handle })
    }

    #[inline]
    fn handle(&self) -> RawHandle {
        self.handle.as_raw_handle()
    }

    /// Read the current attribute.
    pub fn read_attribute(&self) -> Result<u16> {
        let mut info = MaybeUninit::<Console::CONSOLE_SCREEN_BUFFER_INFO>::uninit();
        // SAFETY: The handle is owned and the pointer names live, writable memory.
        check(unsafe { Console::GetConsoleScreenBufferInfo(self.handle(), info.as_mut_ptr()) })?;
        // SAFETY: The call succeeded and hence initialized the buffer info.
        let info = unsafe { info.assume_init() };
        Ok(info.wAttributes)
    }

    /// Write a new attribute.
    pub fn write_attribute(&self, value: u16) -> Result<()> {
        // SAFETY: The handle is owned and the attribute is passed by value.
        check(unsafe { Console::SetConsoleTextAttribute(self.handle(), value) })?;
        Ok(())
    }
}
