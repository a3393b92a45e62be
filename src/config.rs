// Upstream URLs and the defaults derived from the user's home directory.
// Resolved once at startup and passed down; nothing in the install flow
// reads the environment after this point.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Upstream repository that gets cloned and built.
pub const REPOSITORY_URL: &str = "https://github.com/GuillaumeRochette/OpenFace";

/// License the user has to accept before anything touches the disk.
pub const LICENSE_URL: &str =
    "https://github.com/TadasBaltrusaitis/OpenFace/blob/master/OpenFace-license.txt";

/// Home-derived default locations.
#[derive(Debug, Clone)]
pub struct Defaults {
    /// Where the repository is cloned when no path is given: `~/OpenFace`.
    pub install_path: PathBuf,
    /// Profile that receives the PATH line when none is given: `~/.bashrc`.
    pub profile_path: PathBuf,
}

impl Defaults {
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        Ok(Defaults {
            install_path: home.join("OpenFace"),
            profile_path: home.join(".bashrc"),
        })
    }
}
