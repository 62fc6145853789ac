type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Why a request to the bibliographic service did not produce a payload.
///
/// These are diagnostics: a lookup turns any of them into
/// [`LookupOutcome::Failure`](crate::LookupOutcome::Failure) and logs the detail.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    status: Option<u16>,
    source: Option<DynError>,
}

/// The stage of the request that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was received (network unreachable, DNS, TLS..).
    IO,
    /// The service answered with a non-success status code.
    Http,
    /// The response body is not the expected JSON.
    Deserialize,
}

impl Error {
    /// The service answered with the non-success `status`.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            kind: ErrorKind::Http,
            status: Some(status),
            source: None,
        }
    }

    /// Wraps the underlying cause of a failed request.
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            status: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The response status, only present for [`ErrorKind::Http`].
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::IO => f.write_str("request failed")?,
            ErrorKind::Http => f.write_str("unexpected response")?,
            ErrorKind::Deserialize => f.write_str("malformed volumes payload")?,
        };

        if let Some(status) = self.status {
            write!(f, ": status {status}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
