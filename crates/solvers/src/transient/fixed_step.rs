//! Fixed-step solver for coupled problems.
//!
//! Advances a [`CoupledProblem`] from `t = 0` to a configured end time with a
//! constant step size. Every step runs the same three phases:
//!
//! ```text
//! freeze:   frozen ← live
//! advance:  live   ← integrate each variable, reading auxiliary inputs from frozen
//! time:     t      ← (step + 1)·h
//! ```
//!
//! Time is computed from the step count rather than accumulated, so the time
//! after `N` steps is `N·h` up to a single rounding.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] for the initial state (step 0) and one after
//! every integration step. Observers can return [`Action::StopEarly`] to end
//! the run after the current event.
//!
//! # Example
//!
//! ```ignore
//! use rotorsim_solvers::{integrators::Rk4, transient::fixed_step};
//!
//! let config = fixed_step::Config::new(1e-4, 0.5)?;
//! let solution = fixed_step::solve_unobserved(&problem, &Rk4, initial, &config);
//!
//! for sample in &solution.history {
//!     println!("t={}: {:?}", sample.time, sample.state);
//! }
//! ```

mod action;
mod config;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Sample, Solution, Status};

use rotorsim_core::{CoupledProblem, Integrator, Observer, Staged};

/// Where the solver is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Emitting the initial state.
    Initializing,
    /// Advancing one step at a time.
    Stepping,
    /// Terminal; the state is no longer mutated.
    Done(Status),
}

/// Integrates a coupled problem with a fixed step size.
///
/// # Algorithm
///
/// 1. Emit the initial state as step 0.
/// 2. While fewer than [`Config::steps`] steps have been taken:
///    - Freeze the live state.
///    - Let the problem advance every variable from the frozen copy.
///    - Advance time by one step.
///    - Emit the new state.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution.
///
/// The loop itself cannot fail: derivatives and integrators are total. A step
/// size that is too large for the problem may still drive the state to
/// infinity or NaN; use an observer to detect that.
pub fn solve<P, I, Obs>(
    problem: &P,
    integrator: &I,
    initial: P::State,
    config: &Config,
    mut observer: Obs,
) -> Solution<P::State>
where
    P: CoupledProblem,
    I: Integrator,
    Obs: Observer<Event<P::State>, Action>,
{
    let steps = config.steps();
    let h = config.step_size();

    // Grown per sample; `steps` can run into the billions.
    let mut history = Vec::new();

    let mut state = Staged::new(initial);
    let mut step = 0;
    let mut phase = Phase::Initializing;

    loop {
        phase = match phase {
            Phase::Initializing => {
                let stop = emit(&mut observer, &mut history, config, 0, state.live());

                if stop {
                    Phase::Done(Status::StoppedByObserver)
                } else if steps == 0 {
                    Phase::Done(Status::Complete)
                } else {
                    Phase::Stepping
                }
            }
            Phase::Stepping => {
                let t = config.time_at(step);

                state.freeze();
                let (frozen, live) = state.split();
                problem.advance(integrator, frozen, live, t, h);
                step += 1;

                let stop = emit(&mut observer, &mut history, config, step, state.live());

                if stop {
                    Phase::Done(Status::StoppedByObserver)
                } else if step < steps {
                    Phase::Stepping
                } else {
                    Phase::Done(Status::Complete)
                }
            }
            Phase::Done(status) => {
                return Solution {
                    status,
                    steps: step,
                    time: config.time_at(step),
                    state: state.into_live(),
                    history,
                };
            }
        };
    }
}

/// Integrates a coupled problem with a fixed step size without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<P, I>(
    problem: &P,
    integrator: &I,
    initial: P::State,
    config: &Config,
) -> Solution<P::State>
where
    P: CoupledProblem,
    I: Integrator,
{
    solve(problem, integrator, initial, config, ())
}

/// Records a state and hands it to the observer.
///
/// Returns `true` if the observer asked to stop.
fn emit<S, Obs>(
    observer: &mut Obs,
    history: &mut Vec<Sample<S>>,
    config: &Config,
    step: usize,
    state: &S,
) -> bool
where
    S: Clone,
    Obs: Observer<Event<S>, Action>,
{
    let time = config.time_at(step);

    if config.keeps_history() {
        history.push(Sample {
            time,
            state: state.clone(),
        });
    }

    let event = Event {
        step,
        time,
        state: state.clone(),
    };

    matches!(observer.observe(&event), Some(Action::StopEarly))
}
