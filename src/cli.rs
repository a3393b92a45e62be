// Command-line surface. A `None` on any decision means "ask the user";
// silent mode fills every decision with its fixed default so no prompt
// is ever shown.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Defaults;

/// Guided installer for the OpenFace facial behaviour analysis toolkit.
#[derive(Parser, Debug, Clone)]
#[command(name = "openface-install", version, about)]
pub struct Cli {
    /// Pre-answer the license prompt ("true" accepts, "false" declines).
    #[arg(long, value_name = "BOOL")]
    pub license_accepted: Option<bool>,

    /// Directory to install OpenFace into.
    #[arg(long, value_name = "PATH")]
    pub install_path: Option<PathBuf>,

    /// Delete the destination first if it already exists.
    #[arg(long)]
    pub overwrite_install: bool,

    /// Keep only the built binaries and models after the build.
    #[arg(long, value_name = "BOOL")]
    pub minimal_install: Option<bool>,

    /// Append the PATH export line to a login-shell profile.
    #[arg(long, value_name = "BOOL")]
    pub add_to_login_shell: Option<bool>,

    /// Profile file that receives the PATH export line.
    #[arg(long, value_name = "PATH")]
    pub profile_path: Option<PathBuf>,

    /// Run without prompts: accept the license, install to the default
    /// location (overwriting any previous install), keep the install
    /// minimal, and add it to the default profile.
    #[arg(long)]
    pub silent_install: bool,
}

impl Cli {
    /// Apply the fixed silent-mode answers. Flags given alongside
    /// `--silent-install` are overridden; silence means every decision
    /// is already made.
    pub fn with_silent_defaults(mut self, defaults: &Defaults) -> Self {
        if self.silent_install {
            self.license_accepted = Some(true);
            self.install_path = Some(defaults.install_path.clone());
            self.overwrite_install = true;
            self.minimal_install = Some(true);
            self.add_to_login_shell = Some(true);
            self.profile_path = Some(defaults.profile_path.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn defaults() -> Defaults {
        Defaults {
            install_path: PathBuf::from("/home/user/OpenFace"),
            profile_path: PathBuf::from("/home/user/.bashrc"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn silent_install_pre_answers_every_decision() {
        let cli = Cli::try_parse_from(["openface-install", "--silent-install"])
            .unwrap()
            .with_silent_defaults(&defaults());

        assert_eq!(cli.license_accepted, Some(true));
        assert_eq!(cli.install_path, Some(PathBuf::from("/home/user/OpenFace")));
        assert!(cli.overwrite_install);
        assert_eq!(cli.minimal_install, Some(true));
        assert_eq!(cli.add_to_login_shell, Some(true));
        assert_eq!(cli.profile_path, Some(PathBuf::from("/home/user/.bashrc")));
    }

    #[test]
    fn without_silent_install_unset_decisions_stay_unset() {
        let cli = Cli::try_parse_from(["openface-install", "--license-accepted", "false"])
            .unwrap()
            .with_silent_defaults(&defaults());

        assert_eq!(cli.license_accepted, Some(false));
        assert_eq!(cli.install_path, None);
        assert!(!cli.overwrite_install);
        assert_eq!(cli.minimal_install, None);
        assert_eq!(cli.add_to_login_shell, None);
        assert_eq!(cli.profile_path, None);
    }

    #[test]
    fn mixed_mode_keeps_supplied_flags() {
        let cli = Cli::try_parse_from([
            "openface-install",
            "--install-path",
            "/opt/openface",
            "--overwrite-install",
        ])
        .unwrap();

        assert_eq!(cli.install_path, Some(PathBuf::from("/opt/openface")));
        assert!(cli.overwrite_install);
        assert_eq!(cli.license_accepted, None);
    }
}
