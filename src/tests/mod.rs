// Test modules for errtypes crate
//
// Each source file has a corresponding test file that focuses on behavior
// verification. Wrapping through external collaborators (anyhow, thiserror)
// is covered by the integration tests under tests/.

pub mod chain;
