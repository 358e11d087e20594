use crate::Result;
use serde::Serialize;
use serde_json::{Serializer, Value, ser::Formatter};
use std::io;

/// Compact JSON formatter that prints floats the way `JSON.stringify` does.
///
/// Whole floats lose their fraction (`1.0` -> `1`), magnitudes outside
/// `[1e-6, 1e21)` use an exponent with an explicit sign (`1e+21`, `1e-7`),
/// and `-0.0` prints as `0`.
struct JsNumberFormatter;

impl Formatter for JsNumberFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_js_number(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.write_f64(writer, f64::from(value))
    }
}

fn format_js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // Display already yields the shortest round-trip digits without an exponent
        return value.to_string();
    }

    let exponent = format!("{:e}", value);
    match exponent.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponent,
    }
}

/// Serializes a JSON value into the bytes a browser would send for it.
pub fn to_js_json(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, JsNumberFormatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
