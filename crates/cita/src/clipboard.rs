use std::io;

/// A sink for the plain-text citation.
///
/// Every [`io::Write`] is a clipboard, the terminal front-end writes to stdout so the citation can
/// be piped into a system clipboard tool.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the underlying sink fails.
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

impl<W: io::Write> Clipboard for W {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self, "{text}")?;
        self.flush()
    }
}
