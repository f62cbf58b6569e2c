use std::io::{self, Write};

use rotorsim_core::Observer;
use rotorsim_solvers::transient::fixed_step::Event;

use crate::traits::{CanStopEarly, Tabular};

/// Width of every column, in characters.
const WIDTH: usize = 11;

/// Digits after the decimal point.
const PRECISION: usize = 8;

/// An observer that writes each event as a row of fixed-width numbers.
///
/// Every row starts with the event time followed by the state's
/// [`Tabular`] columns, each right-aligned in 11 characters with 8 decimals
/// and separated by a single space.
///
/// The first write error is kept, and every later event asks the solver to
/// stop. Check [`error`](Self::error) after the run, or use
/// [`into_inner`](Self::into_inner) to get the writer back.
///
/// # Example
///
/// ```ignore
/// let mut table = TableWriter::<_, 6>::new(io::stdout().lock()).with_header();
/// fixed_step::solve(&problem, &Rk4, initial, &config, &mut table);
/// table.into_inner()?;
/// ```
#[derive(Debug)]
pub struct TableWriter<W, const N: usize> {
    writer: W,
    header: bool,
    started: bool,
    error: Option<io::Error>,
}

impl<W: Write, const N: usize> TableWriter<W, N> {
    /// Creates a table writer without a header line.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: false,
            started: false,
            error: None,
        }
    }

    /// Writes a `#`-prefixed line of column names before the first row.
    #[must_use]
    pub fn with_header(mut self) -> Self {
        self.header = true;
        self
    }

    /// Returns the first write error, if any occurred.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while writing rows, or the flush error.
    pub fn into_inner(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_header(&mut self, headers: &[&str; N]) -> io::Result<()> {
        write!(self.writer, "# {:>w$}", "t [s]", w = WIDTH - 2)?;
        for name in headers {
            write!(self.writer, " {name:>WIDTH$}")?;
        }
        writeln!(self.writer)
    }

    fn write_row(&mut self, time: f64, row: &[f64; N]) -> io::Result<()> {
        write!(self.writer, "{time:WIDTH$.PRECISION$}")?;
        for value in row {
            write!(self.writer, " {value:WIDTH$.PRECISION$}")?;
        }
        writeln!(self.writer)
    }
}

impl<W, S, A, const N: usize> Observer<Event<S>, A> for TableWriter<W, N>
where
    W: Write,
    S: Tabular<N>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }

        let result = if self.header && !self.started {
            self.write_header(&S::HEADERS)
        } else {
            Ok(())
        };
        self.started = true;

        match result.and_then(|()| self.write_row(event.time, &event.state.row())) {
            Ok(()) => None,
            Err(err) => {
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut TableWriter` to be passed to solvers that take an observer by
/// value, so the writer can be recovered after the run.
impl<W, S, A, const N: usize> Observer<Event<S>, A> for &mut TableWriter<W, N>
where
    W: Write,
    S: Tabular<N>,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rotorsim_solvers::transient::fixed_step::Action;

    #[derive(Clone, Copy)]
    struct Point {
        x: f64,
        y: f64,
    }

    impl Tabular<2> for Point {
        const HEADERS: [&'static str; 2] = ["x [m]", "y [m]"];

        fn row(&self) -> [f64; 2] {
            [self.x, self.y]
        }
    }

    fn event(step: usize, time: f64, x: f64, y: f64) -> Event<Point> {
        Event {
            step,
            time,
            state: Point { x, y },
        }
    }

    fn feed(table: &mut TableWriter<Vec<u8>, 2>, event: &Event<Point>) -> Option<Action> {
        table.observe(event)
    }

    /// A writer that always fails.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rows_use_fixed_width_columns() {
        let mut table = TableWriter::new(Vec::new());

        assert_eq!(feed(&mut table, &event(0, 0.0, 1.5, -0.25)), None);
        assert_eq!(feed(&mut table, &event(1, 1e-4, 12.0, 3.0)), None);

        let text = String::from_utf8(table.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            " 0.00000000  1.50000000 -0.25000000\n \
             0.00010000 12.00000000  3.00000000\n"
        );
    }

    #[test]
    fn header_is_written_once() {
        let mut table = TableWriter::new(Vec::new()).with_header();

        feed(&mut table, &event(0, 0.0, 0.0, 0.0));
        feed(&mut table, &event(1, 0.5, 0.0, 0.0));

        let text = String::from_utf8(table.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "#     t [s]       x [m]       y [m]");
        assert!(lines[1..].iter().all(|line| !line.starts_with('#')));
    }

    #[test]
    fn write_errors_stop_the_run() {
        let mut table: TableWriter<Broken, 2> = TableWriter::new(Broken);

        let action: Option<Action> = table.observe(&event(0, 0.0, 0.0, 0.0));

        assert_eq!(action, Some(Action::StopEarly));
        assert_eq!(table.error().map(ToString::to_string).as_deref(), Some("disk full"));
        assert!(table.into_inner().is_err());
    }
}
