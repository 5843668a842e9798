use crate::types::{OntologyIri, PhysicalLocation};
use std::collections::HashMap;
use std::sync::mpsc;

/// Outcome of a resolution attempt.
///
/// The three variants are observably different to callers: a resolved
/// location is loaded directly, `UseIri` asks the caller to load the
/// identifier's own textual form as if it were a location, and
/// `Unresolved` skips the import entirely. They are never collapsed into
/// a single optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An alternate physical location was supplied.
    Resolved(PhysicalLocation),

    /// No alternative was picked, but resolution should proceed with the
    /// identifier itself as the location.
    UseIri,

    /// The attempt was declined, cancelled, or failed.
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// The location this outcome asks the caller to load, if any.
    /// `UseIri` yields the identifier's own text as a location.
    pub fn location_for(&self, iri: &OntologyIri) -> Option<PhysicalLocation> {
        match self {
            Resolution::Resolved(location) => Some(location.clone()),
            Resolution::UseIri => Some(PhysicalLocation::from_uri(iri.as_str())),
            Resolution::Unresolved => None,
        }
    }
}

/// Last-resort resolution capability, consulted only after the automatic
/// strategies produced nothing.
///
/// Implementations may block the calling thread while an external actor
/// (a person at a prompt, a scripted answer table, a remote service)
/// decides. Whatever happens inside, the call returns one of the three
/// [`Resolution`] outcomes; cancellation and internal failures surface as
/// `Unresolved` plus a log line, never as a panic or an error the caller
/// has to handle.
pub trait ImportHandler {
    fn resolve(&self, iri: &OntologyIri) -> Resolution;
}

/// Handler that declines every request. The headless default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineHandler;

impl ImportHandler for DeclineHandler {
    fn resolve(&self, iri: &OntologyIri) -> Resolution {
        log::debug!("No interactive handler configured, leaving '{iri}' unresolved");
        Resolution::Unresolved
    }
}

/// Handler that answers from a pre-seeded table.
///
/// Identifiers without a seeded answer get the fallback outcome
/// (`Unresolved` unless configured otherwise). This is the scripted port
/// of interactive resolution and doubles as the natural test stand-in.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHandler {
    answers: HashMap<OntologyIri, Resolution>,
    fallback: Option<Resolution>,
}

impl ScriptedHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that answers every request with `fallback`.
    pub fn with_fallback(fallback: Resolution) -> Self {
        Self {
            answers: HashMap::new(),
            fallback: Some(fallback),
        }
    }

    /// Seeds the answer for one identifier.
    pub fn answer(mut self, iri: impl Into<OntologyIri>, outcome: Resolution) -> Self {
        self.answers.insert(iri.into(), outcome);
        self
    }
}

impl ImportHandler for ScriptedHandler {
    fn resolve(&self, iri: &OntologyIri) -> Resolution {
        self.answers
            .get(iri)
            .or(self.fallback.as_ref())
            .cloned()
            .unwrap_or(Resolution::Unresolved)
    }
}

/// One pending question for the decision side of a [`ChannelHandler`]:
/// which location, if any, should stand in for this identifier?
///
/// Dropping the request without answering counts as cancellation.
pub struct ImportRequest {
    iri: OntologyIri,
    reply: mpsc::Sender<anyhow::Result<Resolution>>,
}

impl ImportRequest {
    pub fn iri(&self) -> &OntologyIri {
        &self.iri
    }

    /// Delivers the outcome to the blocked caller.
    pub fn answer(self, outcome: Resolution) {
        let _ = self.reply.send(Ok(outcome));
    }

    /// Reports that the decision logic itself failed. The caller logs the
    /// cause and treats the attempt as unresolved.
    pub fn fail(self, cause: anyhow::Error) {
        let _ = self.reply.send(Err(cause));
    }
}

/// Handler that forwards each request to a dedicated decision thread (a UI
/// event loop, a console reader, anything that owns the receiving end) and
/// blocks until that side answers or goes away.
///
/// The hand-off is deadlock-free from any originating thread except the
/// decision worker itself; the worker must not call back into the handler
/// it serves.
#[derive(Clone)]
pub struct ChannelHandler {
    requests: mpsc::Sender<ImportRequest>,
}

impl ChannelHandler {
    /// Creates the handler and the request stream its decision side
    /// consumes.
    pub fn new() -> (Self, mpsc::Receiver<ImportRequest>) {
        let (requests, inbox) = mpsc::channel();
        (Self { requests }, inbox)
    }
}

impl ImportHandler for ChannelHandler {
    fn resolve(&self, iri: &OntologyIri) -> Resolution {
        let (reply, outcome) = mpsc::channel();
        let request = ImportRequest {
            iri: iri.clone(),
            reply,
        };

        if self.requests.send(request).is_err() {
            log::debug!("Resolution of '{iri}' cancelled: decision side is gone");
            return Resolution::Unresolved;
        }

        match outcome.recv() {
            Ok(Ok(resolution)) => resolution,
            Ok(Err(cause)) => {
                log::error!("Interactive resolution of '{iri}' failed: {cause:#}");
                Resolution::Unresolved
            }
            Err(mpsc::RecvError) => {
                log::debug!("Resolution of '{iri}' cancelled before an answer arrived");
                Resolution::Unresolved
            }
        }
    }
}
