use std::io::{self, Stdout, Write};

/// Overwritable `Iteration: i/n` line for interactive runs.
///
/// Write failures are ignored, the line carries no state the simulation
/// depends on.
pub struct Progress<W: Write> {
    out: W,
    total: usize,
    enabled: bool,
}

impl Progress<Stdout> {
    pub fn stdout(total: usize, enabled: bool) -> Self {
        Self::new(io::stdout(), total, enabled)
    }
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, total: usize, enabled: bool) -> Self {
        Self {
            out,
            total,
            enabled,
        }
    }

    pub fn tick(&mut self, iteration: usize) {
        if self.enabled {
            let _ = write!(self.out, "\rIteration: {}/{}", iteration, self.total);
            let _ = self.out.flush();
        }
    }

    pub fn finish(&mut self) {
        if self.enabled {
            let _ = writeln!(self.out);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
