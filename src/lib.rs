//! Workspace-level integration tests for FFTMul-rs live in `tests/`.
