use colored::Colorize;

/// Status and error chatter, kept on stderr so stdout stays a clean report
/// stream that can be piped straight into an email digest.
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn status(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message.dimmed());
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "error:".red().bold());
    }
}
