use std::io;

use cita::{scan::Scanner, LookupController, LookupOutcome};

use clap::Subcommand;
use log::{trace, warn};

use crate::{interact, scan, view::TerminalView};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Look up a book by ISBN and print its citation
    ///
    /// Hyphens and whitespace in the ISBN are ignored.
    #[clap(arg_required_else_help = true)]
    Isbn {
        /// The ISBN to search for
        isbn: String,

        /// Only print the plain-text citation, ready to be piped to a clipboard tool
        #[clap(short, long)]
        plain: bool,
    },

    /// Look up the first ISBN read from a barcode decoder
    ///
    /// Decoded barcodes are read from stdin, one per line, for example from `zbarcam`. Lines
    /// which do not contain 10 to 13 digits are skipped.
    Scan {
        /// Only print the plain-text citation, ready to be piped to a clipboard tool
        #[clap(short, long)]
        plain: bool,
    },

    /// Keep asking for ISBNs and offer to copy each citation
    Interact,
}

impl Commands {
    pub async fn execute(self, api_url: &str) -> eyre::Result<()> {
        match self {
            Commands::Isbn { isbn, plain } => {
                let controller = controller(api_url, plain);
                controller.lookup(&isbn).await;
                if plain {
                    controller.copy_citation(&mut io::stdout());
                }
            }
            Commands::Scan { plain } => {
                trace!("Waiting for decoded barcodes on stdin..");
                let stdin = io::stdin();
                let Some(isbn) = Scanner::new().scan(scan::events(stdin.lock())) else {
                    warn!("No ISBN found in the scanned input");
                    return Ok(());
                };

                let controller = controller(api_url, plain);
                controller.lookup_scanned(isbn.as_str()).await;
                if plain {
                    controller.copy_citation(&mut io::stdout());
                }
            }
            Commands::Interact => {
                let controller = controller(api_url, false);
                loop {
                    let input = interact::user_input("ISBN")?;
                    if let Some(LookupOutcome::Success(_)) = controller.lookup(&input).await {
                        if interact::user_confirm("¿Copiar cita?")? {
                            controller.copy_citation(&mut io::stdout());
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn controller(api_url: &str, plain: bool) -> LookupController<reqwest::Client, TerminalView> {
    LookupController::new(reqwest::Client::new())
        .with_base_url(api_url)
        .with_view(TerminalView::new(!plain))
}
