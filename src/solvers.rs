use tracing::debug;

use crate::{
    keplers_equation, keplers_equation_derivative, KEPLER_MAX_ITERS, KEPLER_TOLERANCE,
};

/// The outcome of a Kepler solve, including convergence diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// The eccentric anomaly, in radians.
    ///
    /// When [`converged`][Self::converged] is false this is the best estimate
    /// found before the iteration cap.
    pub eccentric_anomaly: f64,

    /// The number of Newton–Raphson iterations performed.
    pub iterations: u32,

    /// Whether the Newton step fell below [`KEPLER_TOLERANCE`].
    pub converged: bool,
}

/// Gets the elliptic eccentric anomaly for a mean anomaly.
///
/// Solves `E - e sin(E) = M` for `E`. The mean anomaly is in radians;
/// callers normally pass it normalized to `[0, tau)`.
///
/// # Unchecked Operation
/// This function does not check whether the eccentricity is actually
/// elliptic (`0 <= e < 1`). Nonsensical output may be produced otherwise.
///
/// # Non-convergence
/// If the iteration cap is reached, the last estimate is returned rather
/// than an error. This can only happen for eccentricities very close to 1,
/// above [`SAFE_ECCENTRICITY_LIMIT`][crate::SAFE_ECCENTRICITY_LIMIT].
///
/// # Example
/// ```
/// use keplerian_orrery::solve_kepler;
///
/// let (mean_anomaly, eccentricity) = (1.0, 0.5);
/// let eccentric_anomaly = solve_kepler(mean_anomaly, eccentricity);
///
/// let residual = eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly;
/// assert!(residual.abs() < 1e-10);
/// ```
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_kepler_detailed(mean_anomaly, eccentricity).eccentric_anomaly
}

/// Gets the elliptic eccentric anomaly for a mean anomaly, along with
/// convergence diagnostics.
///
/// See [`solve_kepler`] for details.
///
/// # Method
/// Newton–Raphson seeded with `E_0 = M + e sin(M)`, iterating
/// `E <- E - (E - e sin(E) - M) / (1 - e cos(E))` until the Newton step is
/// below [`KEPLER_TOLERANCE`] or [`KEPLER_MAX_ITERS`] steps have been taken.
///
/// The root always lies in `[M - e, M + e]`. That bracket is tightened
/// after every step, and a Newton step landing outside it is replaced by a
/// bisection step, which keeps the iteration from wandering off for
/// eccentricities close to 1.
pub fn solve_kepler_detailed(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    solve_kepler_capped(mean_anomaly, eccentricity, KEPLER_MAX_ITERS)
}

pub(crate) fn solve_kepler_capped(
    mean_anomaly: f64,
    eccentricity: f64,
    max_iters: u32,
) -> KeplerSolution {
    let mut lower = mean_anomaly - eccentricity;
    let mut upper = mean_anomaly + eccentricity;

    // Starting guess
    let mut eccentric_anomaly = mean_anomaly + eccentricity * mean_anomaly.sin();

    for iteration in 1..=max_iters {
        let f = keplers_equation(mean_anomaly, eccentric_anomaly, eccentricity);

        if f == 0.0 {
            return KeplerSolution {
                eccentric_anomaly,
                iterations: iteration,
                converged: true,
            };
        }

        let fp = keplers_equation_derivative(eccentric_anomaly, eccentricity);
        let step = f / fp;

        if step.is_finite() && step.abs() < KEPLER_TOLERANCE {
            return KeplerSolution {
                eccentric_anomaly: eccentric_anomaly - step,
                iterations: iteration,
                converged: true,
            };
        }

        // f is increasing in E, so its sign tells which side of the root we're on
        if f < 0.0 {
            lower = eccentric_anomaly;
        } else {
            upper = eccentric_anomaly;
        }

        let mut next = eccentric_anomaly - step;

        if !next.is_finite() || next < lower || next > upper {
            next = 0.5 * (lower + upper);
        }

        eccentric_anomaly = next;
    }

    debug!(
        mean_anomaly,
        eccentricity,
        eccentric_anomaly,
        "Kepler solver hit the iteration cap, returning best estimate"
    );

    KeplerSolution {
        eccentric_anomaly,
        iterations: max_iters,
        converged: false,
    }
}
