//! Session bootstrap: decides whether a chat may start.
//!
//! A chat needs a [`SessionContext`]. When one is supplied, the session is
//! ready and a [`Celebration`] plays once. When it is not, the caller is
//! sent back to the entry route to collect it.

mod celebration;
mod context;

pub use celebration::{Celebration, Confetti, NoCelebration};
pub use context::SessionContext;

/// Route of the entry form that collects name and subject.
pub const ENTRY_ROUTE: &str = "/";

/// Outcome of [`bootstrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The chat may render with this context.
    Ready(SessionContext),
    /// The chat must not render; go to this route instead.
    Redirect(&'static str),
}

/// Checks the supplied context once at session start.
pub fn bootstrap(context: Option<SessionContext>, celebration: &dyn Celebration) -> Bootstrap {
    match context {
        Some(context) => {
            tracing::debug!(name = %context.name(), subject = %context.subject(), "session ready");
            celebration.celebrate(&context);
            Bootstrap::Ready(context)
        }
        None => {
            tracing::debug!(route = ENTRY_ROUTE, "session context missing, redirecting");
            Bootstrap::Redirect(ENTRY_ROUTE)
        }
    }
}
