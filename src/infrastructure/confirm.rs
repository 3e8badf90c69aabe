use std::io::{self, BufRead, Write};
use tracing::warn;
use crate::ports::DeletionConfirmer;

/// Lists the candidates and asks for a y/N answer.
pub struct PromptConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, rendered_names: &[String]) -> io::Result<()> {
        writeln!(self.output, "The following expired profiles will be removed:")?;
        for name in rendered_names {
            writeln!(self.output, "  {}", name)?;
        }
        write!(self.output, "Remove {} profile(s)? [y/N] ", rendered_names.len())?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> DeletionConfirmer for PromptConfirmer<R, W> {
    /// Declines when the prompt cannot be shown or the answer cannot be read.
    fn confirm(&mut self, rendered_names: &[String]) -> bool {
        if let Err(e) = self.prompt(rendered_names) {
            warn!(error = %e, "could not show removal prompt");
            return false;
        }

        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Approves without asking.
pub struct AutoConfirmer;

impl DeletionConfirmer for AutoConfirmer {
    fn confirm(&mut self, _rendered_names: &[String]) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut out = Vec::new();
        let ok = PromptConfirmer::new(answer.as_bytes(), &mut out).confirm(&["A  Old App".to_string()]);
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_yes() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
    }

    #[test]
    fn anything_else_declines() {
        assert!(!ask("\n").0);
        assert!(!ask("nope\n").0);
        assert!(!ask("").0);
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_prompt_declines() {
        let mut confirmer = PromptConfirmer::new("y\n".as_bytes(), Closed);
        assert!(!confirmer.confirm(&["A  Old App".to_string()]));
    }

    #[test]
    fn prompt_lists_candidates() {
        let (_, shown) = ask("n\n");
        assert!(shown.contains("  A  Old App\n"));
        assert!(shown.ends_with("[y/N] "));
    }
}
