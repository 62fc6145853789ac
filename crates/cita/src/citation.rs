//! The single citation style produced by this crate.
//!
//! ```text
//! SURNAME, Given Names; OTHER, Author. (year). <em>Title: Subtitle</em>. City: Publisher.
//! ```

use std::fmt;

use crate::record::BookRecord;

const EM_OPEN: &str = "<em>";
const EM_CLOSE: &str = "</em>";

/// A formatted citation.
///
/// The rich variant wraps the title in `<em>` markup, the plain variant is the same text without
/// the markup and is what gets copied to a clipboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Citation {
    rich: String,
}

impl Citation {
    /// Formats `record`, or returns an empty citation when there is no record.
    #[must_use]
    pub fn format(record: Option<&BookRecord>) -> Self {
        let rich = record.map(compose).unwrap_or_default();
        Self { rich }
    }

    /// The citation with the title wrapped in `<em>` markup.
    #[must_use]
    pub fn rich(&self) -> &str {
        &self.rich
    }

    /// The citation with every emphasis tag removed.
    #[must_use]
    pub fn plain(&self) -> String {
        self.rich.replace(EM_OPEN, "").replace(EM_CLOSE, "")
    }

    /// Returns `true` when there was no record to format.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rich.is_empty()
    }

    /// Splits the rich citation around the emphasised span: `(before, emphasised, after)`.
    ///
    /// Used by renderers that style the title themselves instead of printing markup. Returns
    /// [`None`] if the markup is not found.
    #[must_use]
    pub fn emphasis_parts(&self) -> Option<(&str, &str, &str)> {
        let (before, rest) = self.rich.split_once(EM_OPEN)?;
        let (em, after) = rest.rsplit_once(EM_CLOSE)?;
        Some((before, em, after))
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rich)
    }
}

fn compose(record: &BookRecord) -> String {
    let authors = record
        .authors
        .iter()
        .map(String::as_str)
        .map(format_author)
        .collect::<Vec<_>>()
        .join("; ");

    let full_title = if record.subtitle.is_empty() {
        record.title.clone()
    } else {
        format!("{}: {}", record.title, record.subtitle)
    };

    format!(
        "{authors}. ({}). {EM_OPEN}{full_title}{EM_CLOSE}. {}: {}.",
        record.year, record.city, record.publisher
    )
}

/// Reorders a name as `SURNAME, Given Names`.
///
/// The last space separated token is taken as the surname, so compound surnames are not
/// recognised. A single token name is upper cased without a comma.
#[must_use]
pub fn format_author(author: &str) -> String {
    match author.rsplit_once(' ') {
        Some((given, surname)) => format!("{}, {given}", surname.to_uppercase()),
        None => author.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_author, Citation};
    use crate::record::BookRecord;

    fn cien_anos() -> BookRecord {
        BookRecord {
            authors: vec!["Gabriel García Márquez".to_owned()],
            year: "1967".to_owned(),
            title: "Cien años de soledad".to_owned(),
            subtitle: String::new(),
            publisher: "Sudamericana".to_owned(),
            city: "Buenos Aires".to_owned(),
        }
    }

    #[test]
    fn formats_single_author_without_subtitle() {
        assert_eq!(
            "MÁRQUEZ, Gabriel García. (1967). <em>Cien años de soledad</em>. Buenos Aires: Sudamericana.",
            cien_anos().citation().rich()
        );
    }

    #[test]
    fn single_token_author_has_no_comma() {
        assert_eq!("ANONYMOUS", format_author("Anonymous"));
    }

    #[test]
    fn last_token_is_the_surname() {
        assert_eq!("MCCONNELL, Steve", format_author("Steve McConnell"));
        assert_eq!("VARGAS, Mario Llosa", format_author("Mario Llosa Vargas"));
        assert_eq!("STRASSE, Hans", format_author("Hans straße"));
    }

    #[test]
    fn authors_are_joined_in_source_order() {
        let record = BookRecord {
            authors: vec![
                "Brian W. Kernighan".to_owned(),
                "Dennis Ritchie".to_owned(),
                "Homer".to_owned(),
            ],
            ..cien_anos()
        };

        assert!(record
            .citation()
            .rich()
            .starts_with("KERNIGHAN, Brian W.; RITCHIE, Dennis; HOMER. (1967)."));
    }

    #[test]
    fn subtitle_is_joined_with_a_colon() {
        let record = BookRecord {
            title: "Code Complete".to_owned(),
            subtitle: "A Practical Handbook of Software Construction".to_owned(),
            ..cien_anos()
        };

        assert!(record
            .citation()
            .rich()
            .contains("<em>Code Complete: A Practical Handbook of Software Construction</em>"));
    }

    #[test]
    fn plain_only_drops_the_markup() {
        let citation = cien_anos().citation();
        assert_eq!(
            "MÁRQUEZ, Gabriel García. (1967). Cien años de soledad. Buenos Aires: Sudamericana.",
            citation.plain()
        );
        assert_eq!(
            citation.rich().replace("<em>", "").replace("</em>", ""),
            citation.plain()
        );
    }

    #[test]
    fn no_record_formats_to_empty() {
        let citation = Citation::format(None);
        assert!(citation.is_empty());
        assert_eq!("", citation.rich());
        assert_eq!("", citation.plain());
    }

    #[test]
    fn emphasis_parts_split_around_title() {
        let citation = cien_anos().citation();
        let (before, em, after) = citation.emphasis_parts().unwrap();

        assert_eq!("MÁRQUEZ, Gabriel García. (1967). ", before);
        assert_eq!("Cien años de soledad", em);
        assert_eq!(". Buenos Aires: Sudamericana.", after);
        assert_eq!(None, Citation::default().emphasis_parts());
    }
}
