//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    let project = Project::empty();
    let run = project.anonymous().args(&["--help"]).passes();
    for command in ["show", "days", "legend", "events", "browse"] {
        assert!(run.stdout().contains(command), "missing {}", command);
    }
}

#[test]
fn events_help_lists_subcommands() {
    let project = Project::empty();
    project
        .anonymous()
        .args(&["events", "--help"])
        .passes()
        .stdout_has("list")
        .stdout_has("add")
        .stdout_has("remove")
        .stdout_has("kinds");
}

#[test]
fn unknown_command_fails() {
    let project = Project::empty();
    project.anonymous().args(&["rotate"]).fails();
}
