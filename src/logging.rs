//! ANSI-colored console logger passed by reference into the render pipeline.

/// Structured logger with dry-run awareness.
///
/// Errors and warnings go to stderr, everything else to stdout. Debug
/// messages are only shown when the verbose flag is set.
#[derive(Debug)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31mERROR\x1b[0m {msg}");
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("\x1b[33mWARN\x1b[0m  {msg}");
    }

    /// Announce a top-level stage of the run.
    pub fn stage(&self, msg: &str) {
        println!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m");
    }

    pub fn info(&self, msg: &str) {
        println!("  {msg}");
    }

    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("  \x1b[2m{msg}\x1b[0m");
        }
    }

    pub fn dry_run(&self, msg: &str) {
        println!("  \x1b[33m[DRY RUN]\x1b[0m {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logger_new() {
        let log = Logger::new(false);
        assert!(!log.verbose);
    }

    #[test]
    fn logger_verbose() {
        let log = Logger::new(true);
        assert!(log.verbose);
    }

    #[test]
    fn methods_do_not_panic() {
        let log = Logger::new(true);
        log.error("e");
        log.warn("w");
        log.stage("s");
        log.info("i");
        log.debug("d");
        log.dry_run("p");
    }
}
