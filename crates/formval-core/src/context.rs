//! Per-request context passed explicitly through the validation pipeline.

use crate::identity::TraceId;

/// Header carrying the correlation identifier between services.
pub const TRACE_ID_HEADER: &str = "x-b3-traceid";

/// Request-scoped values the pipeline needs but does not derive itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub trace_id: TraceId,
}

impl RequestContext {
    pub fn new(trace_id: TraceId) -> Self {
        Self { trace_id }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(TraceId::generate())
    }
}
