//! The formatter, i.e., the markup language's parser and interpreter.

use std::io::Result;
use std::mem::take;

use caretcon::Device;

use crate::context::Context;
use crate::token::{Layer, TokenKind, Tokenizer, OPEN_BRACE};

/// The marker emitted in place of a captured brace span.
///
/// Brace spans are reserved for future structured formatting. Until that
/// lands, a rendered span contributes this fixed marker to the output while
/// its content is surfaced through [`Rendered::spans`].
pub const SPAN_MARKER: &str = "[format]";

// ====================================================================================================================

/// A character sink.
///
/// A sink accepts string slices in source order. Implementing the trait for
/// one string-like append operation, instead of duplicating the formatter per
/// character width or stream type, keeps rendering generic: [`String`] is a
/// sink, and [`IoSink`] turns any [`Write`](std::io::Write) into one.
///
/// This trait is object-safe.
pub trait Sink {
    /// Append the text to this sink.
    fn append(&mut self, text: &str) -> Result<()>;
}

impl Sink for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// A mutably borrowed sink is a sink.
impl<S: Sink + ?Sized> Sink for &mut S {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }
}

/// An adapter turning any writer into a sink.
#[derive(Debug)]
pub struct IoSink<W>(pub W);

impl<W: std::io::Write> Sink for IoSink<W> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.0.write_all(text.as_bytes())
    }
}

// ====================================================================================================================

/// The parse state of a render call.
///
/// Idle is both the initial and the terminal state for well-formed markup.
/// Malformed markup never fails the scan; it resolves back to Idle with the
/// offending characters emitted literally, or leaves residual buffered text
/// that the end of the scan emits literally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FormatState {
    /// Between constructs; literal text accumulates.
    #[default]
    Idle,
    /// An escape-introducer for the given layer has been seen.
    AwaitingColorDigit(Layer),
    /// An open brace has been seen; span content accumulates.
    InsideBraceSpan,
}

/// The result of a render call.
///
/// The rendered text goes to the sink and the color changes go to the
/// device, so the only data left to return is the content of captured brace
/// spans, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    spans: Vec<String>,
}

impl Rendered {
    /// Get the captured brace spans in source order.
    pub fn spans(&self) -> &[String] {
        &self.spans
    }

    /// Consume this result, returning the captured brace spans.
    pub fn into_spans(self) -> Vec<String> {
        self.spans
    }
}

/// A formatter interpreting one markup string.
///
/// The formatter scans its source exactly once: [`render`](Self::render)
/// consumes the formatter, writes literal text to the sink, and issues color
/// changes against the context's device as they appear in the source. Text
/// accumulated so far is flushed to the sink before every color change, so
/// the interleaving of text and color updates matches the markup.
///
/// Rendering the same source twice, into fresh sinks with the device reset
/// in between, produces identical text and identical attribute writes; the
/// one-shot contract exists because a render also mutates console state.
///
///
/// # Example
///
/// ```
/// # use caretmark::{Context, Formatter};
/// # use caretmark::test_device::RecordingDevice;
/// # use std::io::Result;
/// # fn run() -> Result<()> {
/// let mut context = Context::new(RecordingDevice::default());
/// let mut sink = String::new();
/// Formatter::new("^2ok^! and done").render(&mut sink, &mut context)?;
/// assert_eq!(sink, "ok and done");
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Debug)]
pub struct Formatter<'a> {
    source: &'a str,
}

impl<'a> Formatter<'a> {
    /// Create a new formatter over the given markup string.
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Render this formatter's markup.
    ///
    /// Literal text is written to the sink and color directives are issued
    /// against the context's device. An empty source emits nothing and
    /// touches neither sink nor device.
    ///
    /// Malformed markup is recovered locally and emitted literally. The only
    /// errors are those of the sink and the device, plus the configuration
    /// error of a color map that cannot resolve a named slot.
    pub fn render<S, D>(self, sink: &mut S, context: &mut Context<D>) -> Result<Rendered>
    where
        S: Sink,
        D: Device,
    {
        let mut tokenizer = Tokenizer::new(self.source);
        let mut rendered = Rendered::default();
        if !tokenizer.good() {
            return Ok(rendered);
        }

        let mut state = FormatState::Idle;
        let mut buffer = String::new();
        let mut span = String::new();

        loop {
            let Some(token) = tokenizer.current() else {
                break;
            };

            // A malformed escape pushes the introducer back as a literal and
            // then reprocesses the current token from Idle.
            let mut reprocess = true;
            while reprocess {
                reprocess = false;

                match state {
                    FormatState::Idle => match token.kind() {
                        TokenKind::Introducer(layer) => {
                            state = FormatState::AwaitingColorDigit(layer);
                        }
                        TokenKind::OpenBrace => state = FormatState::InsideBraceSpan,
                        // An unmatched closing brace is literal.
                        TokenKind::CloseBrace | TokenKind::Literal => buffer.push(token.value()),
                    },
                    FormatState::AwaitingColorDigit(layer) => {
                        state = FormatState::Idle;
                        if token.kind() == TokenKind::Introducer(layer) {
                            // Two consecutive introducers collapse to one literal.
                            buffer.push(layer.introducer());
                        } else if let Some(index) = token.value().to_digit(16) {
                            flush(sink, &mut buffer)?;
                            context.set_color(layer, index as u8)?;
                        } else if token.value() == layer.reset_marker() {
                            flush(sink, &mut buffer)?;
                            context.reset_color(layer)?;
                        } else {
                            buffer.push(layer.introducer());
                            reprocess = true;
                        }
                    }
                    FormatState::InsideBraceSpan => match token.kind() {
                        TokenKind::CloseBrace => {
                            if !span.is_empty() {
                                buffer.push_str(SPAN_MARKER);
                                rendered.spans.push(take(&mut span));
                            }
                            state = FormatState::Idle;
                        }
                        // No nesting; everything up to the closing brace is
                        // span content.
                        _ => span.push(token.value()),
                    },
                }
            }

            if !tokenizer.next() {
                break;
            }
        }

        // Residual markup at end of input is emitted literally.
        match state {
            FormatState::AwaitingColorDigit(layer) => buffer.push(layer.introducer()),
            FormatState::InsideBraceSpan => {
                buffer.push(OPEN_BRACE);
                buffer.push_str(&span);
            }
            FormatState::Idle => {}
        }
        flush(sink, &mut buffer)?;

        Ok(rendered)
    }
}

/// Write the buffered text to the sink and clear the buffer.
fn flush<S: Sink>(sink: &mut S, buffer: &mut String) -> Result<()> {
    if !buffer.is_empty() {
        sink.append(buffer)?;
        buffer.clear();
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_util {
    pub(crate) use crate::test_device::RecordingDevice;

    use std::cell::RefCell;
    use std::io::Result;
    use std::rc::Rc;

    use caretcon::{Attribute, Device};

    use super::Sink;

    /// One observable render effect.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Event {
        Text(String),
        Attribute(u16),
    }

    pub(crate) type Log = Rc<RefCell<Vec<Event>>>;

    /// A sink sharing an event log with a [`TraceDevice`].
    pub(crate) struct TraceSink(pub(crate) Log);

    impl Sink for TraceSink {
        fn append(&mut self, text: &str) -> Result<()> {
            self.0.borrow_mut().push(Event::Text(text.to_owned()));
            Ok(())
        }
    }

    /// A device sharing an event log with a [`TraceSink`].
    pub(crate) struct TraceDevice {
        attribute: Attribute,
        log: Log,
    }

    impl TraceDevice {
        pub(crate) fn new(log: Log) -> Self {
            Self {
                attribute: Attribute::default(),
                log,
            }
        }
    }

    impl Device for TraceDevice {
        fn attribute(&self) -> Result<Attribute> {
            Ok(self.attribute)
        }

        fn set_attribute(&mut self, attribute: Attribute) -> Result<()> {
            self.attribute = attribute;
            self.log.borrow_mut().push(Event::Attribute(attribute.value()));
            Ok(())
        }
    }
}
