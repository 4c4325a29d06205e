//! Interactive browse specs

use crate::prelude::*;

fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn password_prompt_retries_until_correct() {
    let project = Project::empty();
    project
        .rota()
        .args(&["browse"])
        .stdin(&script(&["nope", SECRET, "q"]))
        .passes()
        .stdout_has("Password Required")
        .stdout_has("Incorrect password. Please try again.")
        .stdout_has("Worker Rotation Schedule");
}

#[test]
fn go_to_then_step_by_week() {
    let project = Project::empty();
    project
        .rota()
        .args(&["browse"])
        .stdin(&script(&[SECRET, "g", "2025-05-05", "N", "P", "p", "q"]))
        .passes()
        .stdout_has("Monday, May 5, 2025")
        .stdout_has("Monday, May 12, 2025")
        .stdout_has("Sunday, May 4, 2025");
}

#[test]
fn events_added_in_browse_are_saved() {
    let project = Project::empty();
    project
        .rota()
        .args(&["browse"])
        .stdin(&script(&[SECRET, "g", "2025-05-11", "a", "D", "", "2", "", "q"]))
        .passes()
        .stdout_has("Added event");

    project
        .rota()
        .args(&["events", "list"])
        .passes()
        .stdout_has("2025-05-11 Sun  D Bakare Toyosi  Sunday Swap");
}

#[test]
fn end_of_input_ends_session() {
    let project = Project::empty();
    project.rota().args(&["browse"]).stdin("").passes();
}
