//! Text content stream operators

use crate::document::Color;
use crate::font::encode_win_ansi;
use std::io::Write;

/// A single line of text placed with its baseline at (`x`, `y`)
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    /// Font resource name on the page, e.g. `F1`
    pub font: &'a str,
    pub size: f32,
    pub color: Color,
    pub x: f64,
    pub y: f64,
}

impl TextRun<'_> {
    /// Content stream operators drawing `text` with this run's settings
    pub fn operators(&self, text: &str) -> Vec<u8> {
        let Color { r, g, b } = self.color;
        let mut ops = Vec::with_capacity(text.len() + 64);

        // writes into a Vec cannot fail
        let _ = write!(
            ops,
            "BT\n{r} {g} {b} rg\n/{} {} Tf\n{} {} Td\n",
            self.font, self.size, self.x, self.y
        );
        ops.extend_from_slice(&encode_text_literal(text));
        ops.extend_from_slice(b" Tj\nET\n");

        ops
    }
}

/// Encode text as a PDF literal string, e.g. `(Flat 4 \(B\))`
///
/// The text is converted to WinAnsiEncoding first; the string delimiters and
/// the backslash are escaped.
pub fn encode_text_literal(text: &str) -> Vec<u8> {
    let encoded = encode_win_ansi(text);
    let mut literal = Vec::with_capacity(encoded.len() + 2);

    literal.push(b'(');
    for byte in encoded {
        if matches!(byte, b'(' | b')' | b'\\') {
            literal.push(b'\\');
        }
        literal.push(byte);
    }
    literal.push(b')');

    literal
}
