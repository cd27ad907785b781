//! Human-readable output of accumulated phase durations.

use std::fmt;

use crate::PhaseTimers;

impl PhaseTimers {
    /// Prints the phase duration statistics to stdout.
    ///
    /// Prints nothing if no time was recorded for any phase. This is always the case when the
    /// record was only ever measured with a disabled clock, so a pipeline can call this
    /// unconditionally without producing output in builds that do not time phases.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }
        println!("{self}");
    }
}

impl fmt::Display for PhaseTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No phase timing statistics captured.")?;
            return Ok(());
        }

        writeln!(f, "Mesh phase timing statistics:")?;
        for (phase, seconds) in self.durations() {
            writeln!(f, "  {phase}: {seconds:.6} s")?;
        }
        writeln!(f, "  total: {:.6} s", self.total())?;

        Ok(())
    }
}
