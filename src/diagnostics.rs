//! Error and warning bridge between the decoding engine and the embedder.
//!
//! Decode failures are reported through return values; the messages that
//! explain *why* something failed, and the non-fatal oddities that fail
//! nothing at all (deprecated fields, tag inconsistencies), travel through
//! this side channel instead. The embedder registers a pair of sinks once,
//! process-wide, and every decode session forwards its diagnostics to them.
//!
//! The slots are write-once: the first [`install_sinks`] call wins and later
//! calls are no-ops, so repeated module initialization cannot re-register
//! handlers. When no sinks are installed, messages fall through to
//! [`tracing`] events so embedders that configure a subscriber still see
//! them. Emission never affects control flow or the return value of any
//! operation.

use std::sync::OnceLock;

use tracing::{error, warn};

/// Maximum length of a forwarded diagnostic message, in bytes.
///
/// Longer messages are truncated on a character boundary. Truncation is
/// silent; it is never an error.
pub const MAX_MESSAGE_LEN: usize = 1024;

/// A caller-supplied sink receiving `(module, message)` pairs.
pub type DiagnosticSink = Box<dyn Fn(&str, &str) + Send + Sync>;

struct Sinks {
    error: DiagnosticSink,
    warning: DiagnosticSink,
}

static SINKS: OnceLock<Sinks> = OnceLock::new();

/// Install the process-wide error and warning sinks.
///
/// Returns `true` if the sinks were installed, `false` if a previous call
/// already installed a pair (in which case the new sinks are dropped and the
/// existing ones stay in place).
pub fn install_sinks(error: DiagnosticSink, warning: DiagnosticSink) -> bool {
    SINKS.set(Sinks { error, warning }).is_ok()
}

/// Forward an error-severity diagnostic.
pub(crate) fn emit_error(module: &str, message: &str) {
    let message = truncate(message);
    match SINKS.get() {
        Some(sinks) => (sinks.error)(module, message),
        None => error!(module, "{}", message),
    }
}

/// Forward a warning-severity diagnostic.
pub(crate) fn emit_warning(module: &str, message: &str) {
    let message = truncate(message);
    match SINKS.get() {
        Some(sinks) => (sinks.warning)(module, message),
        None => warn!(module, "{}", message),
    }
}

/// Bound a message to [`MAX_MESSAGE_LEN`] bytes on a character boundary.
fn truncate(message: &str) -> &str {
    if message.len() <= MAX_MESSAGE_LEN {
        return message;
    }
    let mut end = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

// =============================================================================
// Tests
// =============================================================================
