use miette::Result;

/// Main entry point for the approval-report CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    approval_reporters::run()
}
