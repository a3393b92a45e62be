// Fatal outcomes that end the run. Everything else flows through
// `anyhow` with context added at the failure site.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// The user declined the license terms. Nothing was written.
    #[error("license terms declined, aborting install")]
    LicenseDeclined,

    /// The destination exists and overwriting was not authorized.
    #[error("install path {} already exists (pass --overwrite-install to replace it)", .0.display())]
    DestinationExists(PathBuf),

    /// The clone/download/build pipeline reported failure. The failing
    /// step's own diagnostics have already gone to the terminal.
    #[error("install pipeline failed ({0})")]
    PipelineFailed(ExitStatus),
}
