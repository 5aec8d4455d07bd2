// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Load an input snapshot from disk.
// - Leave every calculation to the use case handlers; the binary in main.rs only wires and prints.

pub mod config;
pub mod snapshot;
