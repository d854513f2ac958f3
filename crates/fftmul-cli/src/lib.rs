//! # fftmul-cli
//!
//! CLI output, digit file persistence, JSON reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod report;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use report::RunReport;
