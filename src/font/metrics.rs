//! AFM advance widths for Helvetica and Helvetica-Bold.
//!
//! The ASCII tables are indexed by `code - 32`. Accented Latin letters have
//! the same advance as their base letter in both fonts, so they are folded
//! before lookup.

const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

pub fn helvetica_width(ch: char) -> u16 {
    lookup(&HELVETICA, ch).unwrap_or_else(|| match ch {
        '\u{2019}' | '\u{2018}' => 222,
        '\u{201C}' | '\u{201D}' => 333,
        _ => shared_width(ch),
    })
}

pub fn helvetica_bold_width(ch: char) -> u16 {
    lookup(&HELVETICA_BOLD, ch).unwrap_or_else(|| match ch {
        '\u{2019}' | '\u{2018}' => 278,
        '\u{201C}' | '\u{201D}' => 500,
        _ => shared_width(ch),
    })
}

fn lookup(table: &[u16; 95], ch: char) -> Option<u16> {
    let ch = fold_accent(ch);
    let code = ch as u32;
    if (32..=126).contains(&code) {
        Some(table[(code - 32) as usize])
    } else {
        None
    }
}

/// Punctuation whose width is the same in both weights.
fn shared_width(ch: char) -> u16 {
    match ch {
        '\u{2022}' => 350,
        '\u{2013}' => 556,
        '\u{2014}' | '\u{2026}' => 1000,
        '\u{00A0}' => 278,
        '\u{00AB}' | '\u{00BB}' => 556,
        '\u{00BF}' => 611,
        '\u{00A1}' => 333,
        'ß' => 611,
        _ => DEFAULT_WIDTH,
    }
}

/// Map an accented Latin-1 letter to its base letter.
fn fold_accent(ch: char) -> char {
    match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => ch,
    }
}
