mod clock;
mod confirm;
mod diagnostics;
mod identity_store;
mod profile_files;

pub use clock::{FixedClock, SystemClock};
pub use confirm::{AutoConfirmer, PromptConfirmer};
pub use diagnostics::{RecordingDiagnostics, StderrDiagnostics};
pub use identity_store::{MemoryIdentityStore, PemIdentityStore};
pub use profile_files::FsProfileSource;
