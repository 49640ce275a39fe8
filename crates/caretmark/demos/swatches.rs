//! Render a swatch line for every palette slot of the default color map.
//!
//! Run with `cargo run --example swatches`. The example needs a controlling
//! console; the session restores the original attribute when it drops.

use std::io::Result;

use caretcon::Session;
use caretmark::{Context, Formatter, IoSink};

fn main() -> Result<()> {
    let session = Session::connect()?;
    println!("console attribute on entry: {:?}", session.original());

    let mut context = Context::new(session);
    let mut sink = IoSink(std::io::stdout());

    for index in 0..16_u8 {
        let digit = char::from_digit(index.into(), 16).expect("indices 0..16 are hex digits");
        let color = context.map().color(index)?;
        let half = if color.is_bright() { "bright" } else { "base" };
        let markup = format!("^{digit}slot {digit}: {half} {color:?}^!\n");
        Formatter::new(&markup).render(&mut sink, &mut context)?;
    }

    Formatter::new("*8on red*: and ^^ or ** stay literal\n").render(&mut sink, &mut context)?;
    context.device().restore()
}
