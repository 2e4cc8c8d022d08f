//! Standard (base-14) font handling
//!
//! The standard fonts are provided by every PDF reader, so nothing is
//! embedded: a page only needs a Type1 font dictionary naming the base font.

use lopdf::{dictionary, Dictionary};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Standard font families available without embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandardFont {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl StandardFont {
    /// PostScript name of the family variant for the given weight
    pub fn base_font(self, weight: FontWeight) -> &'static str {
        match (self, weight) {
            (StandardFont::Helvetica, FontWeight::Regular) => "Helvetica",
            (StandardFont::Helvetica, FontWeight::Bold) => "Helvetica-Bold",
            (StandardFont::Times, FontWeight::Regular) => "Times-Roman",
            (StandardFont::Times, FontWeight::Bold) => "Times-Bold",
            (StandardFont::Courier, FontWeight::Regular) => "Courier",
            (StandardFont::Courier, FontWeight::Bold) => "Courier-Bold",
        }
    }

    /// Build the font dictionary for a variant
    pub(crate) fn to_pdf_dictionary(self, weight: FontWeight) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font(weight),
            "Encoding" => "WinAnsiEncoding",
        }
    }
}

/// Encode text as WinAnsiEncoding bytes
///
/// Latin-1 characters map to themselves, the CP1252 extras (curly quotes,
/// dashes, euro sign, ...) map to their 0x80-0x9F codes. Control characters
/// become spaces and anything else unrepresentable becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
        c if c.is_control() => b' ',
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}
