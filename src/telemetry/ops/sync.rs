use tracing::info_span;
use tracing::Span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Sync;

#[derive(Copy, Clone, Debug)]
pub enum Phase { ReadDoc, Scrape, Patch, WriteDoc }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::ReadDoc => "read_doc",
        Phase::Scrape => "scrape",
        Phase::Patch => "patch",
        Phase::WriteDoc => "write_doc",
    }}
    fn span(&self) -> Span { match self {
        Phase::ReadDoc => info_span!("read_doc"),
        Phase::Scrape => info_span!("scrape"),
        Phase::Patch => info_span!("patch"),
        Phase::WriteDoc => info_span!("write_doc"),
    }}
}

impl OpMarker for Sync {
    const NAME: &'static str = "sync";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("sync") }
}
