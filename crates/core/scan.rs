use std::io::BufRead;

use cita::scan::ScanEvent;

/// Reads decoder output, one symbol per line, until the reader is exhausted or fails.
pub fn events<R: BufRead>(reader: R) -> impl Iterator<Item = ScanEvent> {
    reader
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| parse_line(&line))
}

/// Parses a decoder line, either a raw payload or `SYMBOLOGY:payload` as printed by zbar.
fn parse_line(line: &str) -> Option<ScanEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let event = match line.split_once(':') {
        Some((format, text)) if is_symbology(format) => ScanEvent::Decoded {
            text: text.to_owned(),
            format: Some(format.to_owned()),
        },
        _ => ScanEvent::decoded(line),
    };
    Some(event)
}

// EAN-13, UPC-A, CODE-128, I2/5..
fn is_symbology(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_uppercase())
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '-' | '/'))
}
