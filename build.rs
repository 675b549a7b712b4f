//! Build script: embeds the release version via `DOTFILES_LINK_VERSION`.

use std::process::Command;

fn main() {
    // Release builds pass DOTFILES_LINK_VERSION; local builds use git describe.
    if let Ok(version) = std::env::var("DOTFILES_LINK_VERSION") {
        println!("cargo:rustc-env=DOTFILES_LINK_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=DOTFILES_LINK_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DOTFILES_LINK_VERSION");
}
