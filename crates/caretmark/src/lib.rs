//! # Caretmark
//!
//! This crate interprets **inline caret markup** for 16-color console
//! output. A markup string mixes literal text with two-character color
//! directives; rendering writes the text to a character [`Sink`] while
//! driving the color attribute of a console [`Device`](caretcon::Device) as
//! a side effect, in source order.
//!
//! The markup surface:
//!
//! | Markup | Meaning |
//! |--------|---------|
//! | `^<hex-digit>` | set the foreground to palette slot `0`–`f` (case-insensitive) |
//! | `*<hex-digit>` | set the background to the corresponding slot |
//! | `^!` | reset the foreground to the context's default color |
//! | `*:` | reset the background to the context's default color |
//! | `^^` | a literal `^` (likewise `**` for `*`) |
//! | `{...}` | reserved span syntax, captured but not interpreted |
//!
//! Anything else is emitted verbatim, and malformed markup degrades to
//! literal text instead of failing the render.
//!
//! Rendering needs three collaborators, all caller-owned:
//!
//!   * a [`Context`] bundling the [`ColorMap`], the default color, and the
//!     device, so nothing hides in process-wide state;
//!   * a [`Sink`] receiving the literal text, e.g., a [`String`] or an
//!     [`IoSink`] around standard output;
//!   * a device, usually a [`caretcon::Session`] so the console's original
//!     attribute is restored when the session drops.
//!
//!
//! # Example
//!
//! ```no_run
//! # use std::io::Result;
//! # use caretcon::Session;
//! # use caretmark::{Context, Formatter, IoSink};
//! # fn run() -> Result<()> {
//! let mut context = Context::new(Session::connect()?);
//! let mut sink = IoSink(std::io::stdout());
//!
//! Formatter::new("^2fine^!, ^8failing^!, and *3highlighted*: text\n")
//!     .render(&mut sink, &mut context)?;
//! # Ok(())
//! # }
//! ```

mod color;
mod context;
pub mod error;
mod format;
pub mod test_device;
mod token;

pub use color::{ColorMap, ConsoleColor};
pub use context::Context;
pub use format::{Formatter, IoSink, Rendered, Sink, SPAN_MARKER};
pub use token::{Layer, Token, TokenKind, Tokenizer};

use caretcon::Device;

/// Reset both layers of the context's device to the default color.
///
/// This is the programmatic equivalent of rendering `"^!*:"`.
pub fn reset<D: Device>(context: &mut Context<D>) -> std::io::Result<()> {
    context.reset_color(Layer::Foreground)?;
    context.reset_color(Layer::Background)
}
