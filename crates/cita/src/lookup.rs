//! The lookup lifecycle: `Idle -> Loading -> {Success, NotFound, Failure}`.
//!
//! A [`LookupController`] owns the only copy of the current outcome and of the last successful
//! [`BookRecord`]. Both are replaced wholesale when a lookup settles and can only be read through
//! the controller. The UI side registers a [`View`] to be told about every transition.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, trace, warn};

use crate::{
    api::{google_books, Client},
    citation::Citation,
    clipboard::Clipboard,
    record::BookRecord,
    ErrorKind, Isbn,
};

/// Message shown for any transport, status or payload failure.
pub const FAILURE_MESSAGE: &str = "Error al buscar el libro. Verifica tu conexión a internet.";

/// The state of the most recent lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A request is in flight.
    Loading,
    /// The first candidate returned by the service.
    Success(BookRecord),
    /// The service answered without any candidate for this identifier.
    NotFound(Isbn),
    /// The service could not be reached, answered with an error status, or sent a malformed
    /// payload.
    Failure(ErrorKind),
}

impl LookupOutcome {
    /// The user facing message for outcomes without a usable result.
    ///
    /// A not found message always contains the normalized identifier verbatim.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NotFound(isbn) => Some(format!(
                "No se encontró información para el ISBN: {isbn}"
            )),
            Self::Failure(_) => Some(FAILURE_MESSAGE.to_owned()),
            Self::Loading | Self::Success(_) => None,
        }
    }

    /// Returns `true` once the lookup has finished, whatever the result.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Callbacks from the controller to whatever renders it.
///
/// Every method defaults to doing nothing so a view only implements what it shows.
pub trait View {
    /// Hide any previous result or error.
    fn clear(&self) {}

    /// Show or hide the loading indicator; submitting is disabled while it is shown.
    fn set_loading(&self, _loading: bool) {}

    /// A decoded barcode was accepted and is about to be looked up.
    fn scanned(&self, _isbn: &Isbn) {}

    /// Show a message for a lookup without a usable result.
    fn show_error(&self, _message: &str) {}

    /// Show a successful lookup.
    fn show_result(&self, _record: &BookRecord, _citation: &Citation) {}
}

impl View for () {}

/// Hides the loading indicator when dropped, so it is cleared however the lookup ends.
struct LoadingGuard<'a, V: View>(&'a V);

impl<'a, V: View> LoadingGuard<'a, V> {
    fn show(view: &'a V) -> Self {
        view.set_loading(true);
        Self(view)
    }
}

impl<V: View> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

#[derive(Default)]
struct State {
    outcome: Option<LookupOutcome>,
    record: Option<BookRecord>,
}

/// Looks books up by ISBN and keeps the result.
pub struct LookupController<C: Client = reqwest::Client, V: View = ()> {
    client: C,
    base_url: String,
    view: V,
    state: Mutex<State>,
}

impl<C: Client> Default for LookupController<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Client> LookupController<C> {
    /// Creates an idle controller using `client` against the Google Books API.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            base_url: google_books::GOOGLE_BOOKS_URL.to_owned(),
            view: (),
            state: Mutex::default(),
        }
    }
}

impl<C: Client, V: View> LookupController<C, V> {
    /// Sends requests to `base_url` instead of the Google Books API.
    ///
    /// The query string `?q=isbn:<ISBN>` is appended to it.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Registers the view that is told about every transition.
    #[must_use]
    pub fn with_view<W: View>(self, view: W) -> LookupController<C, W> {
        let Self {
            client,
            base_url,
            state,
            ..
        } = self;

        LookupController {
            client,
            base_url,
            view,
            state,
        }
    }

    /// The registered view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Looks up a manually entered identifier.
    ///
    /// Returns [`None`] without any transition when `raw` is blank. Otherwise the controller
    /// enters [`LookupOutcome::Loading`], queries the service with the normalized identifier and
    /// returns the settled outcome, which also becomes the current one.
    ///
    /// Lookups are not cancelled by newer ones: if two overlap, whichever settles last is kept.
    pub async fn lookup(&self, raw: &str) -> Option<LookupOutcome> {
        let isbn = Isbn::normalize(raw)?;

        self.state().outcome = Some(LookupOutcome::Loading);
        self.view.clear();

        let outcome = {
            let _loading = LoadingGuard::show(&self.view);

            match google_books::find_volume(&self.client, &self.base_url, &isbn).await {
                Ok(Some(volume)) => LookupOutcome::Success(BookRecord::from(volume)),
                Ok(None) => {
                    info!("No books found for ISBN '{isbn}'");
                    LookupOutcome::NotFound(isbn)
                }
                Err(err) => {
                    error!("Lookup of ISBN '{isbn}' failed: {err}");
                    LookupOutcome::Failure(err.kind())
                }
            }
        };

        self.settle(outcome.clone());
        Some(outcome)
    }

    /// Looks up text emitted by a barcode decoder.
    ///
    /// Only codes with 10 to 13 digits (after dropping everything else) are looked up, anything
    /// else is discarded as scanner noise and returns [`None`].
    pub async fn lookup_scanned(&self, decoded: &str) -> Option<LookupOutcome> {
        let Some(isbn) = Isbn::from_scan(decoded) else {
            debug!("Ignoring scanned code '{decoded}'");
            return None;
        };

        info!("ISBN detected from barcode: {isbn}");
        self.view.scanned(&isbn);
        self.lookup(isbn.as_str()).await
    }

    /// The current outcome, [`None`] until the first lookup starts.
    #[must_use]
    pub fn outcome(&self) -> Option<LookupOutcome> {
        self.state().outcome.clone()
    }

    /// The record from the last successful lookup.
    #[must_use]
    pub fn record(&self) -> Option<BookRecord> {
        self.state().record.clone()
    }

    /// The citation of the last successful lookup, empty if there has been none.
    #[must_use]
    pub fn citation(&self) -> Citation {
        Citation::format(self.state().record.as_ref())
    }

    /// Writes the plain-text citation to `clipboard`.
    ///
    /// Failures are logged and otherwise ignored.
    pub fn copy_citation<B: Clipboard + ?Sized>(&self, clipboard: &mut B) {
        let plain = self.citation().plain();
        if plain.is_empty() {
            trace!("Nothing to copy");
            return;
        }

        if let Err(err) = clipboard.write_text(&plain) {
            warn!("Could not copy the citation: {err}");
        }
    }

    fn settle(&self, outcome: LookupOutcome) {
        {
            let mut state = self.state();
            if let LookupOutcome::Success(record) = &outcome {
                state.record = Some(record.clone());
            }
            state.outcome = Some(outcome.clone());
        }

        match &outcome {
            LookupOutcome::Success(record) => self.view.show_result(record, &record.citation()),
            other => {
                if let Some(message) = other.message() {
                    self.view.show_error(&message);
                }
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
