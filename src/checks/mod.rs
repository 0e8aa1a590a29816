//! Convention checks.
//!
//! Every check is a pure function from already-loaded inputs to a list of
//! `Outcome`s. Reading files and recording outcomes is left to the engine
//! in `lint`, so the checks can be exercised without touching disk.

pub mod conda;
pub mod dockerfile;
pub mod files;
pub mod manifest;

/// Join names for a message: `a, b, c`.
pub(crate) fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
