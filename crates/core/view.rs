use cita::{BookRecord, Citation, Isbn, View};

use console::style;
use log::{info, trace};

/// Renders lookups in the terminal.
///
/// Results go to stdout, messages to stderr. With `details` off only messages are shown and the
/// caller is expected to copy the citation itself.
pub struct TerminalView {
    details: bool,
}

impl TerminalView {
    pub const fn new(details: bool) -> Self {
        Self { details }
    }
}

impl View for TerminalView {
    fn set_loading(&self, loading: bool) {
        if loading {
            info!("Buscando..");
        } else {
            trace!("Done!");
        }
    }

    fn scanned(&self, isbn: &Isbn) {
        eprintln!("{}", style(format!("¡ISBN detectado! {isbn}")).green().for_stderr());
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", style(message).red().for_stderr());
    }

    fn show_result(&self, record: &BookRecord, citation: &Citation) {
        if self.details {
            println!("{}\n\n{}", render_details(record), render_citation(citation));
        }
    }
}

fn render_details(record: &BookRecord) -> String {
    let mut lines = vec![
        format!("Autor(es): {}", record.authors.join(", ")),
        format!("Título: {}", record.title),
    ];
    if !record.subtitle.is_empty() {
        lines.push(format!("Subtítulo: {}", record.subtitle));
    }
    lines.push(format!("Editorial: {}", record.publisher));
    lines.push(format!("Año: {}", record.year));
    lines.push(format!("Ciudad: {}", record.city));

    lines.join("\n")
}

/// The rich citation with the emphasised title in italics instead of markup.
fn render_citation(citation: &Citation) -> String {
    match citation.emphasis_parts() {
        Some((before, em, after)) => format!("{before}{}{after}", style(em).italic()),
        None => citation.plain(),
    }
}
