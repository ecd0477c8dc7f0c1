//! Testing utilities for kennel workspace
//!
//! Shared fixtures for kennels and roster files.

#![allow(missing_docs)]

use kennel_core::{DogId, Kennel};
use std::io::Write;
use tempfile::NamedTempFile;

/// Roster with three dogs and one buddy pair
pub const SAMPLE_ROSTER: &str = r#"
log_filter = "debug"

[[dogs]]
name = "Rex"
age = 3

[[dogs]]
name = "Fido"
age = 5
birthdays = 2

[[dogs]]
name = "Bella"
age = 0

[[buddies]]
pair = ["Rex", "Fido"]
"#;

pub struct Pack {
    pub kennel: Kennel,
    pub rex: DogId,
    pub fido: DogId,
}

pub fn rex_and_fido() -> Pack {
    let mut kennel = Kennel::new();
    let rex = kennel.adopt("Rex", 3);
    let fido = kennel.adopt("Fido", 5);
    Pack { kennel, rex, fido }
}

pub fn buddied_rex_and_fido() -> Pack {
    let mut pack = rex_and_fido();
    pack.kennel.set_buddy(pack.rex, pack.fido).unwrap();
    pack
}

pub fn write_roster(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
