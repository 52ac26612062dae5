use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::Context;
use passlab::password_generation::generate_random_password;
use passlab::CharClasses;

use crate::ProgError;

pub(crate) struct GenerateOptions {
    pub length: usize,
    pub classes: CharClasses,
    pub copy: bool,
    pub json: bool,
}

pub(crate) fn generate(options: GenerateOptions) -> Result<(), ProgError> {
    let mut rng = rand::thread_rng();
    let password = generate_random_password(&mut rng, options.classes, options.length);

    if options.json {
        let report = crate::analyze::Report::new(password.as_str());
        let stdout = io::stdout().lock();
        serde_json::to_writer_pretty(stdout, &report.with_password(&password))
            .context("failed to write JSON to stdout")?;
        println!();
    } else {
        println!("{}", password.as_str());
        println!();
        crate::analyze::print_report(&crate::analyze::Report::new(password.as_str()))?;
    }

    if options.copy {
        send_to_clipboard(password.as_str().as_bytes())?;
        eprintln!("Password copied to clipboard!");
    }
    Ok(())
}

fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut cmd = clipboard_cmd();
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start the clipboard helper (`{program}`)"))?;
    child
        .stdin
        .take()
        .context("clipboard helper has no stdin")?
        .write_all(data)
        .with_context(|| format!("failed to write to the clipboard helper (`{program}`)"))?;
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for the clipboard helper (`{program}`)"))?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "the clipboard helper (`{program}`) exited with {exit_status}"
        ))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
