#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # cita
//!
//! cita looks up a book by ISBN using the Google Books API and formats the result as a
//! bibliographic citation.
//!
//! Identifiers can be typed by a user, in which case they are only stripped of hyphens and
//! whitespace, or come from a barcode decoder, in which case only codes of 10 to 13 digits are
//! accepted. Both end up in [`LookupController::lookup`].
//!
//! ```no_run
//! # async fn run() {
//! use cita::{LookupController, LookupOutcome};
//!
//! let controller = LookupController::<reqwest::Client>::default();
//! if let Some(LookupOutcome::Success(record)) = controller.lookup("978-84-376-0494-7").await {
//!     println!("{}", record.citation().plain());
//! }
//! # }
//! ```

mod api;
pub mod citation;
mod clipboard;
mod error;
pub mod isbn;
pub mod lookup;
pub mod record;
pub mod scan;

pub use api::{google_books::GOOGLE_BOOKS_URL, Client};
pub use citation::Citation;
pub use clipboard::Clipboard;
pub use error::{Error, ErrorKind};
pub use isbn::Isbn;
pub use lookup::{LookupController, LookupOutcome, View};
pub use record::BookRecord;
