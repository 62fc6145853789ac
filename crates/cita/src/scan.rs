//! Turning the output of a barcode decoder into an identifier.
//!
//! Decoders report on a best-effort basis: the same symbol may be read many times, partial reads
//! happen, and most frames carry an error simply because nothing is in view. None of that is
//! surfaced, the [`Scanner`] keeps consuming until something looks like an ISBN.

use log::{debug, trace};

use crate::Isbn;

/// A single report from a barcode decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    /// A symbol was decoded.
    Decoded {
        /// The decoded payload.
        text: String,
        /// The symbology reported alongside the payload, when there is one (`EAN-13`, `UPC-A`..).
        format: Option<String>,
    },
    /// A frame could not be decoded, normal when no barcode is in view.
    Error(String),
}

impl ScanEvent {
    /// A decoded payload without symbology metadata.
    #[must_use]
    pub fn decoded<S: Into<String>>(text: S) -> Self {
        Self::Decoded {
            text: text.into(),
            format: None,
        }
    }
}

/// Consumes [`ScanEvent`]s until one yields an [`Isbn`].
#[derive(Debug, Default)]
pub struct Scanner {
    seen: usize,
}

impl Scanner {
    /// Creates a new scanner.
    #[must_use]
    pub const fn new() -> Self {
        Self { seen: 0 }
    }

    /// Checks a single event, returning the identifier if it is accepted.
    pub fn accept(&mut self, event: &ScanEvent) -> Option<Isbn> {
        self.seen += 1;
        match event {
            ScanEvent::Error(message) => {
                trace!("Ignoring scan error: {message}");
                None
            }
            ScanEvent::Decoded { text, format } => {
                debug!(
                    "Barcode detected: '{text}' ({})",
                    format.as_deref().unwrap_or("unknown format")
                );
                let isbn = Isbn::from_scan(text);
                if isbn.is_none() {
                    debug!("Discarding '{text}', not an ISBN sized code");
                }
                isbn
            }
        }
    }

    /// Scans `events` in order and stops at the first accepted identifier.
    ///
    /// Returns [`None`] if the events run out before any is accepted.
    pub fn scan<I>(&mut self, events: I) -> Option<Isbn>
    where
        I: IntoIterator<Item = ScanEvent>,
    {
        events.into_iter().find_map(|event| self.accept(&event))
    }

    /// How many events this scanner has consumed.
    #[must_use]
    pub const fn seen(&self) -> usize {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::{ScanEvent, Scanner};

    #[test]
    fn errors_and_noise_are_skipped() {
        let events = vec![
            ScanEvent::Error("No MultiFormat Readers were able to detect the code.".to_owned()),
            ScanEvent::decoded("123456789"),
            ScanEvent::decoded("12345678901234"),
            ScanEvent::Decoded {
                text: "978-84-376-0494-7".to_owned(),
                format: Some("EAN-13".to_owned()),
            },
            ScanEvent::decoded("0735619670"),
        ];

        let mut scanner = Scanner::new();
        let isbn = scanner.scan(events).expect("fourth event is an ISBN");

        assert_eq!("9788437604947", isbn.as_str());
        // scanning stops at the first accepted code
        assert_eq!(4, scanner.seen());
    }

    #[test]
    fn running_out_of_events_yields_nothing() {
        let mut scanner = Scanner::new();
        assert_eq!(None, scanner.scan(vec![ScanEvent::decoded("42")]));
        assert_eq!(None, scanner.scan(Vec::<ScanEvent>::new()));
        assert_eq!(1, scanner.seen());
    }
}
