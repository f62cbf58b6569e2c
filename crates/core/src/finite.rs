/// A value that can report whether it has diverged.
///
/// Explicit fixed-step schemes become unstable when the step size is too
/// large for the system's time constants, and the state then grows without
/// bound or turns into NaN. Solvers do not treat this as an error; instead
/// states implement `Finite` so an observer or test can detect it.
pub trait Finite {
    /// Returns `true` if every scalar in the value is finite.
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<T: Finite, const N: usize> Finite for [T; N] {
    fn is_finite(&self) -> bool {
        self.iter().all(Finite::is_finite)
    }
}
