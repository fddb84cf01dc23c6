//! Kepler equation solvers.
//!
//! Elliptical orbits go through the eccentric anomaly, solved by Newton iteration on
//! `E - e sin E - M`. Parabolic orbits go through Barker's cubic `s³ + 3s - w = 0`.
//! Both iterations stop on the *residual* (`|f(x)| < 1e-6`), not on the step size.
use roots::{find_root_newton_raphson, Convergency};

use crate::astro_errors::AstroError;
use crate::constants::{Radian, DPI};
use crate::conversion::unwind;

/// Residual tolerance of the Kepler iterations
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Iteration cap of the Kepler iterations
pub const KEPLER_MAX_ITER: usize = 100;

/// Above this eccentricity Newton started at `M` can wander for hundreds of steps,
/// starting at π converges monotonically.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Stop criterion on the function value only.
///
/// `SimpleConvergency` would also stop when two successive iterates are close, the
/// Kepler solvers are specified on the residual alone.
struct ResidualConvergency {
    tolerance: f64,
    max_iter: usize,
}

impl Convergency<f64> for ResidualConvergency {
    fn is_root_found(&mut self, y: f64) -> bool {
        y.abs() < self.tolerance
    }

    fn is_converged(&mut self, _x1: f64, _x2: f64) -> bool {
        false
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        iter >= self.max_iter
    }
}

fn kepler_convergency() -> ResidualConvergency {
    ResidualConvergency {
        tolerance: KEPLER_TOLERANCE,
        max_iter: KEPLER_MAX_ITER,
    }
}

fn check_elliptical(eccentricity: f64) -> Result<(), AstroError> {
    if (0.0..1.0).contains(&eccentricity) {
        Ok(())
    } else {
        Err(AstroError::EccentricityOutOfRange(eccentricity))
    }
}

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly in radians, any value (reduced to `[0, 2π)` first)
/// * `eccentricity`: orbital eccentricity, must lie in `[0, 1)`
///
/// Return
/// ------
/// * the eccentric anomaly in radians; the starting guess is the reduced mean anomaly,
///   or π for eccentricities of 0.8 and above
/// * `AstroError::EccentricityOutOfRange` for a non elliptical eccentricity
/// * `AstroError::RootFindingError` when the iteration cap is reached
///
/// # See also
/// * [`true_anomaly`]
pub fn eccentric_anomaly(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, AstroError> {
    check_elliptical(eccentricity)?;

    let m = unwind(mean_anomaly);
    let f = |e_anom: f64| e_anom - eccentricity * e_anom.sin() - m;
    let df = |e_anom: f64| 1.0 - eccentricity * e_anom.cos();

    let x0 = if eccentricity < HIGH_ECCENTRICITY {
        m
    } else {
        std::f64::consts::PI
    };

    let mut tol = kepler_convergency();
    Ok(find_root_newton_raphson(x0, &f, &df, &mut tol)?)
}

/// True anomaly from the eccentric anomaly, in `[0, 2π)`.
pub fn true_anomaly_from_eccentric(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let factor = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    (2.0 * (factor * (eccentric_anomaly / 2.0).tan()).atan()).rem_euclid(DPI)
}

/// Solve Kepler's equation and return the true anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly in radians
/// * `eccentricity`: orbital eccentricity in `[0, 1)`
///
/// Return
/// ------
/// * the true anomaly in radians, in `[0, 2π)`
pub fn true_anomaly(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, AstroError> {
    let e_anom = eccentric_anomaly(mean_anomaly, eccentricity)?;
    Ok(true_anomaly_from_eccentric(e_anom, eccentricity))
}

/// Solve Barker's equation `s³ + 3s - w = 0`, with `s = tan(ν/2)` on a parabolic orbit.
pub fn solve_parabolic_cubic(w: f64) -> Result<f64, AstroError> {
    let f = |s: f64| (s * s + 3.0) * s - w;
    let df = |s: f64| 3.0 * s * s + 3.0;

    let mut tol = kepler_convergency();
    Ok(find_root_newton_raphson(w / 3.0, &f, &df, &mut tol)?)
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit() {
        let e_anom = eccentric_anomaly(1.2, 0.0).unwrap();
        assert_eq!(e_anom, 1.2);
        assert_relative_eq!(true_anomaly(1.2, 0.0).unwrap(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_residual_below_tolerance() {
        for &e in &[0.0, 0.1, 0.5, 0.9, 0.99] {
            for k in 0..64 {
                let m = -10.0 + k as f64 * 0.37;
                let e_anom = eccentric_anomaly(m, e).unwrap();
                let residual = e_anom - e * e_anom.sin() - unwind(m);
                assert!(residual.abs() < KEPLER_TOLERANCE, "e={e} m={m}");
            }
        }
    }

    #[test]
    fn test_near_parabolic_convergence() {
        for k in 0..2000 {
            let m = k as f64 * DPI / 2000.0;
            let e_anom = eccentric_anomaly(m, 0.999).unwrap();
            assert!((e_anom - 0.999 * e_anom.sin() - unwind(m)).abs() < KEPLER_TOLERANCE);
        }
    }

    #[test]
    fn test_true_anomaly_range() {
        for &e in &[0.0167, 0.2056, 0.9673] {
            for k in 0..40 {
                let nu = true_anomaly(k as f64 * 0.3 - 6.0, e).unwrap();
                assert!((0.0..DPI).contains(&nu));
            }
        }
    }

    #[test]
    fn test_known_solution() {
        // M = 5°, e = 0.1 gives E ≈ 5.554°
        let e_anom = eccentric_anomaly(5f64.to_radians(), 0.1).unwrap();
        assert_relative_eq!(e_anom.to_degrees(), 5.554, epsilon = 1e-3);
    }

    #[test]
    fn test_eccentricity_out_of_range() {
        assert_eq!(
            eccentric_anomaly(1.0, 1.0),
            Err(AstroError::EccentricityOutOfRange(1.0))
        );
        assert_eq!(
            true_anomaly(1.0, -0.1),
            Err(AstroError::EccentricityOutOfRange(-0.1))
        );
        assert_eq!(
            eccentric_anomaly(1.0, f64::NAN),
            Err(AstroError::EccentricityOutOfRange(f64::NAN))
        );
    }

    #[test]
    fn test_parabolic_cubic() {
        for &w in &[-5.0, 0.0, 0.3, 2.0, 40.0] {
            let s = solve_parabolic_cubic(w).unwrap();
            assert!(((s * s + 3.0) * s - w).abs() < KEPLER_TOLERANCE);
        }
    }
}
