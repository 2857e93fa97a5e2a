//! Folio background worker.
//!
//! Fire-and-forget units of work (asset cleanup, notification email) are
//! dispatched here so their outcome never gates the request path.

mod dispatcher;

pub use dispatcher::TaskDispatcher;
