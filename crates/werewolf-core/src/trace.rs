use http::HeaderName;
use rand::Rng;

/// Header used for inbound adoption and outbound stamping of the trace id
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Length of a generated trace id
pub const TRACE_ID_LEN: usize = 12;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Correlation context for one in-flight request
///
/// Created at request entry, carried in request extensions, read by the
/// error translators, stamped onto the response, then discarded. Never
/// shared across requests.
#[derive(Debug, Clone)]
pub struct TraceContext {
    trace_id: String,
}

impl TraceContext {
    /// Adopt a caller-supplied id verbatim
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self { trace_id: trace_id.into() }
    }

    /// Generate a fresh id: 12 lowercase hex characters (48 bits)
    ///
    /// Low-collision within a single process lifetime, which is all log
    /// correlation needs. Intentionally not cryptographic.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let trace_id = (0..TRACE_ID_LEN).map(|_| char::from(HEX[rng.random_range(0..HEX.len())])).collect();
        Self { trace_id }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.trace_id
    }
}
