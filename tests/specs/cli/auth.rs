//! Password gate specs

use crate::prelude::*;

#[test]
fn missing_password_is_refused() {
    let project = Project::empty();
    project
        .anonymous()
        .env("ROTA_SECRET", SECRET)
        .args(&["legend"])
        .fails()
        .stderr_has("error: Not logged in");
}

#[test]
fn wrong_password_is_refused() {
    let project = Project::empty();
    project
        .rota()
        .args(&["--password", "SPEC-SECRET", "legend"])
        .fails()
        .stderr_has("Incorrect password. Please try again.");
}

#[test]
fn no_configured_secret_refuses_every_password() {
    let project = Project::empty();
    project
        .anonymous()
        .args(&["--password", "anything", "legend"])
        .fails()
        .stderr_has("No password has been configured");
}

#[test]
fn secret_can_come_from_config_file() {
    let project = Project::empty();
    project.file("rota.toml", "secret = \"in-file\"\n");
    project
        .anonymous()
        .args(&["--password", "in-file", "legend"])
        .passes()
        .stdout_has("Worker Legend");
}

#[test]
fn environment_secret_overrides_config_file() {
    let project = Project::empty();
    project.file("rota.toml", "secret = \"in-file\"\n");
    project
        .anonymous()
        .env("ROTA_SECRET", "from-env")
        .args(&["--password", "in-file", "legend"])
        .fails();
    project
        .anonymous()
        .env("ROTA_SECRET", "from-env")
        .args(&["--password", "from-env", "legend"])
        .passes();
}
