//! Blank-run collapsing.
//!
//! Continuum dumps emit every intended blank line inside a byte-code block
//! twice. Within a run of consecutive blank lines this filter drops the
//! odd-numbered ones and keeps the even-numbered ones, so a run of N blank
//! lines becomes N/2 (rounded down).

/// State of the blank-run filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankRun {
    /// Last line had content (initial state)
    #[default]
    Data,
    /// Last line was an odd-numbered blank, dropped
    Empty0,
    /// Last line was an even-numbered blank, kept
    Empty1,
}

impl BlankRun {
    /// Advance by one line. Returns the next state and whether to keep the line.
    pub fn step(self, line: &str) -> (Self, bool) {
        match (line.is_empty(), self) {
            (false, _) => (BlankRun::Data, true),
            (true, BlankRun::Empty0) => (BlankRun::Empty1, true),
            (true, BlankRun::Data | BlankRun::Empty1) => (BlankRun::Empty0, false),
        }
    }
}

/// Iterator adaptor applying [`BlankRun`] to a line stream.
pub struct CollapseBlankRuns<I> {
    lines: I,
    state: BlankRun,
    dropped: usize,
}

impl<I> CollapseBlankRuns<I> {
    /// Number of blank lines removed so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<I, S> Iterator for CollapseBlankRuns<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        loop {
            let line = self.lines.next()?;
            let (state, keep) = self.state.step(line.as_ref());
            self.state = state;
            if keep {
                return Some(line);
            }
            self.dropped += 1;
        }
    }
}

/// Lazily collapse doubled blank lines.
pub fn collapse_blank_runs<I>(lines: I) -> CollapseBlankRuns<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    CollapseBlankRuns {
        lines: lines.into_iter(),
        state: BlankRun::Data,
        dropped: 0,
    }
}
