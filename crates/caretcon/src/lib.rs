//! # Caretcon
//!
//! This crate provides **lightweight and cross-platform access to the
//! console's color attribute**. Its only dependency is the low-level crate
//! enabling system calls, i.e., [`libc`](https://crates.io/crates/libc) on
//! Unix and [`windows-sys`](https://crates.io/crates/windows-sys) on Windows.
//!
//! The model is the classic console text [`Attribute`]: a 16-bit value whose
//! low nibble names one of 16 foreground colors and whose next nibble names
//! the background color. The [`Device`] trait captures the two operations any
//! attribute-carrying device must support, reading the current attribute and
//! writing a new one. [`Console`] implements the trait for the process's
//! controlling console:
//!
//!   * On Windows, it opens `CONOUT$` and uses `GetConsoleScreenBufferInfo`
//!     and `SetConsoleTextAttribute`.
//!   * On Unix, it opens `/dev/tty`, tracks the attribute in a shadow value,
//!     and translates attribute writes into SGR ANSI escape sequences.
//!
//! Applications that change colors should do so through a [`Session`], which
//! reads the attribute once when connecting and restores it when dropped.
//! That guarantees the console leaves the program the way it was found, on
//! early returns and error paths included.
//!
//!
//! # Example
//!
//! ```no_run
//! # use std::io::Result;
//! # use caretcon::{Device, Session};
//! # fn run() -> Result<()> {
//! let mut session = Session::connect()?;
//! let attribute = session.attribute()?;
//! session.set_attribute(attribute.with_foreground(0xc))?;
//! println!("now in light red");
//! // Dropping the session restores the original attribute.
//! # Ok(())
//! # }
//! ```

mod api;
mod attr;
mod con;
mod sys;

pub use api::Device;
pub use attr::Attribute;
pub use con::{Console, Session};
