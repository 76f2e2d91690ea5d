//! school-docs: print-ready school documents with NEIS byte accounting

use anyhow::Result;

fn main() -> Result<()> {
    school_docs::cli::run()
}
