//! # shaswi
//!
//! Command-line entry point. Setup and dispatch live in `lib.rs` so they can
//! be exercised from tests.

fn main() -> anyhow::Result<()> {
    shaswi_cli::run()
}
