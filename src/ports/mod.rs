mod clock;
mod confirm;
mod diagnostics;
mod identity_store;
mod profile_source;

pub use clock::Clock;
pub use confirm::DeletionConfirmer;
pub use diagnostics::DiagnosticSink;
pub use identity_store::IdentityStore;
pub use profile_source::ProfileSource;
