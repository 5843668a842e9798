use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use irimap_resolver::{ImportHandler, OntologyIri, PhysicalLocation, Resolution};

/// Terminal port of interactive resolution: a confirm prompt, then a path
/// prompt. Declining the confirm leaves the import unresolved; an empty
/// path means "load the IRI itself"; an interrupted prompt (Ctrl-C, closed
/// stdin) counts as cancellation.
pub(crate) struct ConsoleImportHandler;

impl ImportHandler for ConsoleImportHandler {
    fn resolve(&self, iri: &OntologyIri) -> Resolution {
        let theme = ColorfulTheme::default();

        let attempt = Confirm::with_theme(&theme)
            .with_prompt(format!(
                "The import {} could not be located. Attempt to resolve it?",
                style(iri).cyan()
            ))
            .default(true)
            .interact();
        match attempt {
            Ok(true) => {}
            Ok(false) => return Resolution::Unresolved,
            Err(err) => {
                log::debug!("Resolution of '{iri}' cancelled: {err}");
                return Resolution::Unresolved;
            }
        }

        let input: Result<String, _> = Input::with_theme(&theme)
            .with_prompt("Path or URI of the document (leave empty to load the IRI itself)")
            .allow_empty(true)
            .interact_text();
        match input {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Resolution::UseIri
                } else {
                    Resolution::Resolved(PhysicalLocation::from_path(text))
                }
            }
            Err(err) => {
                log::debug!("Resolution of '{iri}' cancelled: {err}");
                Resolution::Unresolved
            }
        }
    }
}
