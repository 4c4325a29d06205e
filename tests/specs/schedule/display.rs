//! Name display specs

use crate::prelude::*;

#[test]
fn initials_mode() {
    let project = Project::empty();
    project
        .rota()
        .args(&["show", "--date", "2025-05-04", "--display", "initials"])
        .passes()
        .stdout_has("  A  AJ\n  B  AI\n")
        .stdout_has("Display: Initials");
}

#[test]
fn first_and_last_modes() {
    let project = Project::empty();
    project
        .rota()
        .args(&["show", "--date", "2025-05-04", "--display", "first"])
        .passes()
        .stdout_has("  A  Adenle\n");
    project
        .rota()
        .args(&["show", "--date", "2025-05-04", "--display", "last"])
        .passes()
        .stdout_has("  A  Jeptha\n");
}

#[test]
fn legend_always_uses_full_names() {
    let project = Project::empty();
    project
        .rota()
        .args(&["legend"])
        .passes()
        .stdout_eq(
            "\
Worker Legend
  A  Adenle Jeptha
  B  Adenle Iyewunmi
  C  Adegbola Olamilekan
  D  Bakare Toyosi
  E  Oloyede Dare
  F  Orishile Gideon
  G  Shomulu Kehinde

Work days are Sundays and Mondays only
The same team works on both Sunday and Monday each week
Teams rotate weekly following a 7-week cycle
",
        );
}
