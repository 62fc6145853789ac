//! The normalized result of a successful lookup.

use crate::citation::Citation;

/// Author used when the source lists none.
pub const UNKNOWN_AUTHOR: &str = "Autor desconocido";
/// Year used when the source has no publication date (sin fecha).
pub const UNKNOWN_YEAR: &str = "s.f.";
/// Title used when the source has none.
pub const UNKNOWN_TITLE: &str = "Sin título";
/// Publisher used when the source has none.
pub const UNKNOWN_PUBLISHER: &str = "Editorial desconocida";
/// City used when none can be inferred from the publisher (sin lugar).
pub const UNKNOWN_CITY: &str = "s.l.";

/// A book as returned by a lookup, with every missing field already replaced by its placeholder.
///
/// Records are never patched: a new lookup builds a new record which replaces the old one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookRecord {
    /// Authors in source order, never empty.
    pub authors: Vec<String>,
    /// Four character year or [`UNKNOWN_YEAR`].
    pub year: String,
    /// Main title, without the subtitle.
    pub title: String,
    /// Possibly empty.
    pub subtitle: String,
    /// The publisher exactly as given by the source, a `City: Publisher` form is kept unsplit.
    pub publisher: String,
    /// City of publication, see [`infer_city`].
    pub city: String,
}

impl BookRecord {
    /// Formats this record as a citation.
    #[must_use]
    pub fn citation(&self) -> Citation {
        Citation::format(Some(self))
    }
}

/// Infers the city of publication from a `City: Publisher` string.
///
/// Only the text before the first colon is used (trimmed), the remainder is ignored. Without a
/// colon the city is [`UNKNOWN_CITY`].
#[must_use]
pub fn infer_city(publisher: Option<&str>) -> String {
    publisher
        .and_then(|publisher| publisher.split_once(':'))
        .map_or_else(
            || UNKNOWN_CITY.to_owned(),
            |(city, _)| city.trim().to_owned(),
        )
}

#[cfg(test)]
mod tests {
    use super::infer_city;

    #[test]
    fn city_is_taken_before_first_colon() {
        assert_eq!("Londres", infer_city(Some("Londres: Penguin Books")));
        assert_eq!("Madrid", infer_city(Some("  Madrid  : Alianza: Bolsillo")));
    }

    #[test]
    fn no_colon_means_no_place() {
        assert_eq!("s.l.", infer_city(Some("Sudamericana")));
        assert_eq!("s.l.", infer_city(None));
    }

    #[test]
    fn leading_colon_gives_empty_city() {
        assert_eq!("", infer_city(Some(": Penguin")));
    }
}
