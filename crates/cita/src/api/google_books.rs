use log::{info, trace};
use serde::Deserialize;

use crate::{
    record::{self, BookRecord},
    Error, Isbn,
};

use super::Client;

/// Volumes endpoint of the Google Books API, the query string is appended per request.
pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Search the volumes endpoint at `base_url` for `isbn` and return the first candidate.
///
/// `Ok(None)` means the service answered but had no candidates for the identifier.
pub(crate) async fn find_volume<C: Client>(
    client: &C,
    base_url: &str,
    isbn: &Isbn,
) -> Result<Option<VolumeInfo>, Error> {
    info!("Searching for ISBN '{isbn}' using Google Books API");
    let url = format!("{base_url}?q=isbn:{isbn}");

    let GoogleModel { items } = client.get_json(&url).await?;

    trace!("Request was successful");

    // only the first candidate is ever used, no ranking or merging.
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|item| item.volume_info))
}

/// `items` is left out entirely by the API when nothing matched.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    items: Option<Vec<Item>>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

/// Volume information from the Google Books API, every field is optional.
#[derive(Deserialize, Default)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct VolumeInfo {
    authors: Option<Vec<String>>,
    title: Option<String>,
    subtitle: Option<String>,
    publisher: Option<String>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
}

impl From<VolumeInfo> for BookRecord {
    fn from(info: VolumeInfo) -> Self {
        // Deconstruct to take ownership of fields (avoids cloning).
        let VolumeInfo {
            authors,
            title,
            subtitle,
            publisher,
            published_date,
        } = info;

        let non_empty = |s: &String| !s.is_empty();

        let authors = authors
            .filter(|authors| !authors.is_empty())
            .unwrap_or_else(|| vec![record::UNKNOWN_AUTHOR.to_owned()]);

        let year = published_date
            .filter(non_empty)
            .map_or_else(
                || record::UNKNOWN_YEAR.to_owned(),
                |date| date.chars().take(4).collect(),
            );

        let publisher = publisher.filter(non_empty);
        let city = record::infer_city(publisher.as_deref());

        Self {
            authors,
            year,
            title: title
                .filter(non_empty)
                .unwrap_or_else(|| record::UNKNOWN_TITLE.to_owned()),
            subtitle: subtitle.unwrap_or_default(),
            publisher: publisher.unwrap_or_else(|| record::UNKNOWN_PUBLISHER.to_owned()),
            city,
        }
    }
}
