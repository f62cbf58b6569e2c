use crate::Integrator;

/// Defines a coupled system of scalar state variables advanced in lockstep.
///
/// A coupled problem knows which derivative drives each of its state
/// variables and which other variables each derivative depends on. Solvers
/// call [`advance`](Self::advance) once per step after freezing the state;
/// the problem integrates every variable with the supplied [`Integrator`],
/// taking auxiliary inputs from `frozen` and writing results into `live`.
///
/// Because auxiliary inputs come only from `frozen`, implementations may
/// advance their variables in any order, or in parallel, with identical
/// results.
pub trait CoupledProblem {
    type State: Clone;

    /// Advances every state variable from time `t` by one step of size `h`.
    ///
    /// On entry `live` equals `frozen`. On return `live` holds the state at
    /// `t + h`.
    fn advance<I: Integrator>(
        &self,
        integrator: &I,
        frozen: &Self::State,
        live: &mut Self::State,
        t: f64,
        h: f64,
    );
}
