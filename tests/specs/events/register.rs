//! Special event register specs

use crate::prelude::*;

fn add(project: &Project, args: &[&str]) -> String {
    let mut full = vec!["--format", "json", "events", "add"];
    full.extend_from_slice(args);
    let run = project.rota().args(&full).passes();
    let json: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();
    json["id"].as_str().unwrap().to_string()
}

#[test]
fn empty_register() {
    let project = Project::empty();
    project
        .rota()
        .args(&["events", "list"])
        .passes()
        .stdout_eq("No special events\n");
    project
        .rota()
        .args(&["--format", "json", "events", "list"])
        .passes()
        .stdout_eq("[]\n");
}

#[test]
fn events_persist_as_camel_case_json() {
    let project = Project::empty();
    add(&project, &["B", "2025-05-05", "Monday Swap", "--note", "with C"]);

    let stored: serde_json::Value =
        serde_json::from_str(&project.read("data/specialEvents.json")).unwrap();
    let first = &stored[0];
    assert_eq!(first["workerId"], "B");
    assert_eq!(first["date"], "2025-05-05");
    assert_eq!(first["event"], "Monday Swap");
    assert_eq!(first["note"], "with C");
}

#[test]
fn ids_are_unique_across_adds() {
    let project = Project::empty();
    let first = add(&project, &["A", "2025-05-04", "Others"]);
    let second = add(&project, &["A", "2025-05-04", "Others"]);
    assert_ne!(first, second);
}

#[test]
fn add_then_remove_restores_list() {
    let project = Project::empty();
    add(&project, &["C", "2025-05-11", "Sunday Extra Duty"]);
    let before = project.rota().args(&["events", "list"]).passes();

    let id = add(&project, &["E", "2025-05-12", "Absent (Monday)"]);
    project.rota().args(&["events", "remove", &id]).passes();

    project
        .rota()
        .args(&["events", "list"])
        .passes()
        .stdout_eq(before.stdout());
}

#[test]
fn list_filters_by_date() {
    let project = Project::empty();
    add(&project, &["A", "2025-05-04", "Absent (Sunday)"]);
    add(&project, &["B", "2025-05-05", "Absent (Monday)"]);
    project
        .rota()
        .args(&["events", "list", "--date", "2025-05-05"])
        .passes()
        .stdout_has("B Adenle Iyewunmi")
        .stdout_lacks("A Adenle Jeptha");
}

#[test]
fn day_view_shows_its_events() {
    let project = Project::empty();
    add(&project, &["F", "2025-05-18", "Sunday Swap", "--note", "covering G"]);
    project
        .rota()
        .args(&["show", "--date", "2025-05-18"])
        .passes()
        .stdout_has("Special events")
        .stdout_has("F Orishile Gideon  Sunday Swap  (covering G)");
    project
        .rota()
        .args(&["show", "--date", "2025-05-19"])
        .passes()
        .stdout_lacks("Special events");
}

#[test]
fn saturday_is_rejected() {
    let project = Project::empty();
    project
        .rota()
        .args(&["events", "add", "A", "2025-05-10", "Others"])
        .fails()
        .stderr_has("2025-05-10 (Saturday) is not a work day");
}

#[test]
fn removing_unknown_id_fails() {
    let project = Project::empty();
    project
        .rota()
        .args(&["events", "remove", "12345"])
        .fails()
        .stderr_has("Special event '12345' not found");
}
