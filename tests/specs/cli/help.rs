//! CLI help and version output specs.

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("--compiler");
}

#[test]
fn help_documents_per_file_directive() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Per-file directive")
        .stdout_has("--fail")
        .stdout_has("--std");
}

#[test]
fn help_hides_output_fd() {
    cli().args(&["--help"]).passes().stdout_lacks("--output-fd");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("caliber 0.2");
}
