// The install flow, in the order the user experiences it: license gate,
// destination, clone + build, optional trim, optional PATH line. Each
// phase returns early on failure; nothing later undoes earlier side
// effects.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{Defaults, LICENSE_URL, REPOSITORY_URL};
use crate::error::InstallError;
use crate::ui;

/// Run the whole install. `args` has already had silent-mode defaults
/// applied, so a `None` decision here always means "ask".
pub fn run(args: Cli, defaults: &Defaults) -> Result<()> {
    banner();

    if !license_gate(args.license_accepted)? {
        println!("No, I do not accept the license terms.");
        println!("Aborting install.");
        return Err(InstallError::LicenseDeclined.into());
    }
    println!("Yes, I do accept the license terms.");

    let install_path = resolve_install_path(args.install_path, defaults)?;
    prepare_destination(&install_path, args.overwrite_install)?;
    fetch_and_build(&install_path)?;

    println!("Do you want to keep the install minimal, that is to remove everything");
    println!("but the binaries and the models, to save space?");
    println!("If not, the whole repository, which is quite voluminous, will be kept as is.");
    let minimal = match args.minimal_install {
        Some(choice) => choice,
        None => ui::ask_yes_no("Keep the install minimal?")?,
    };
    if minimal {
        println!("Yes, I want the install to be minimal.");
        minimize(&install_path)?;
    } else {
        println!("No, I want the install to be kept as is.");
    }

    let export_line = path_export_line(&install_path);
    println!("OpenFace can be added to the PATH environment variable automatically.");
    println!("If you want to, the following line will be added in a file read by your login shell:");
    println!("{export_line}");
    println!("Otherwise, you will have to manually add it yourself.");
    let add_to_shell = match args.add_to_login_shell {
        Some(choice) => choice,
        None => ui::ask_yes_no("Add it to your login shell automatically?")?,
    };
    if add_to_shell {
        println!("Yes, I want to have it added automatically.");
        let profile_path = resolve_profile_path(args.profile_path, defaults)?;
        append_profile_line(&profile_path, &export_line)?;
        println!("Added to {}.", profile_path.display());
    } else {
        println!("No, I do not want to have it added automatically.");
    }

    Ok(())
}

fn banner() {
    println!("{}", style("Welcome to the OpenFace installer.").bold().cyan());
    println!("This is a fork of OpenFace, developed and maintained by Tadas Baltrusaitis.");
    println!("In order to continue the install process, please review the license");
    println!("agreement at: {LICENSE_URL}.");
    println!("You must comply with this license agreement, e.g. academic, research or");
    println!("non-commercial purposes, to proceed with the install.");
}

/// First gate: nothing below this touches the filesystem until the
/// license terms are accepted.
fn license_gate(pre_answer: Option<bool>) -> Result<bool> {
    match pre_answer {
        Some(choice) => {
            println!("Do you accept the license terms?");
            Ok(choice)
        }
        None => ui::ask_yes_no("Do you accept the license terms?"),
    }
}

fn resolve_install_path(arg: Option<PathBuf>, defaults: &Defaults) -> Result<PathBuf> {
    match arg {
        Some(path) => ui::absolutize(&path),
        None => {
            println!("The default install path is:");
            println!("{}", defaults.install_path.display());
            println!("Press ENTER to confirm the location, or specify a different one.");
            ui::ask_path("Install path", &defaults.install_path)
        }
    }
}

/// Make sure the destination is ours to write: refuse an existing path
/// unless overwriting was authorized, then create the parent chain.
fn prepare_destination(install_path: &Path, overwrite: bool) -> Result<()> {
    if let Ok(metadata) = install_path.symlink_metadata() {
        if !overwrite {
            return Err(InstallError::DestinationExists(install_path.to_path_buf()).into());
        }
        info!(path = %install_path.display(), "removing previous install");
        if metadata.is_dir() {
            fs::remove_dir_all(install_path)
        } else {
            fs::remove_file(install_path)
        }
        .with_context(|| {
            format!(
                "failed to remove previous install at {}",
                install_path.display()
            )
        })?;
    }
    if let Some(parent) = install_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

/// Clone the repository and run its two setup scripts as one `bash -c`
/// pipeline. `&&` chaining aborts the remaining steps as soon as one
/// fails; the child inherits stdio so its diagnostics reach the user
/// directly.
fn fetch_and_build(install_path: &Path) -> Result<()> {
    println!("OpenFace will now be installed into this location:");
    println!("{}", install_path.display());
    println!("Be patient, the install may take a while.");

    let script = pipeline_script(install_path);
    debug!(%script, "running install pipeline");
    let status = Command::new("bash")
        .arg("-c")
        .arg(&script)
        .status()
        .context("failed to spawn the install pipeline")?;
    if !status.success() {
        return Err(InstallError::PipelineFailed(status).into());
    }
    info!("install pipeline finished");
    println!("Install successful.");
    Ok(())
}

fn pipeline_script(install_path: &Path) -> String {
    let dest = install_path.display();
    [
        format!("git clone {REPOSITORY_URL} '{dest}'"),
        format!("cd '{dest}'"),
        "./download_models.sh".to_string(),
        "./install.sh".to_string(),
    ]
    .join(" && ")
}

/// Trim the installed tree down to the built binaries and the models
/// they load: only `build/` survives at the top level, only `bin/`
/// inside it.
fn minimize(install_path: &Path) -> Result<()> {
    prune_except(install_path, "build")?;
    prune_except(&install_path.join("build"), "bin")?;
    Ok(())
}

/// Delete every entry of `dir` except a subdirectory named `keep`.
/// Directories go recursively, anything else with a single-file delete.
/// The first deletion failure aborts the trim.
fn prune_except(dir: &Path, keep: &str) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to read {}", dir.display()))?;

    let bar = ProgressBar::new(entries.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}").unwrap());
    bar.set_message(format!("trimming {}", dir.display()));

    for entry in entries {
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to inspect {}", entry.path().display()))?;
        if file_type.is_dir() && entry.file_name() == keep {
            bar.inc(1);
            continue;
        }
        let path = entry.path();
        if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        }
        .with_context(|| format!("failed to remove {}", path.display()))?;
        debug!(path = %path.display(), "removed");
        bar.inc(1);
    }
    bar.finish_and_clear();
    Ok(())
}

fn path_export_line(install_path: &Path) -> String {
    format!("export PATH=\"{}/build/bin:$PATH\"", install_path.display())
}

fn resolve_profile_path(arg: Option<PathBuf>, defaults: &Defaults) -> Result<PathBuf> {
    match arg {
        Some(path) => {
            let path = ui::absolutize(&path)?;
            println!("The line will be appended to {}.", path.display());
            Ok(path)
        }
        None => {
            println!("The line will be appended to:");
            println!("{}", defaults.profile_path.display());
            println!("Press ENTER to confirm the location, or specify a different one.");
            ui::ask_path("Profile file", &defaults.profile_path)
        }
    }
}

/// Append the export line plus a separating blank line. Existing profile
/// content is never touched; the file is created when absent.
fn append_profile_line(profile_path: &Path, line: &str) -> Result<()> {
    let mut profile = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(profile_path)
        .with_context(|| format!("failed to open {}", profile_path.display()))?;
    writeln!(profile, "{line}")
        .and_then(|()| writeln!(profile))
        .with_context(|| format!("failed to append to {}", profile_path.display()))?;
    Ok(())
}
