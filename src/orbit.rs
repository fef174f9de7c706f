//! Orbital phase evolution for generating sample input files.
//!
//! The phase obeys `dφ/dτ = (1 + e·cos(φ − ω))²` in the scaled time
//! `τ = t / t*`, with `t* = sqrt(p³ / (G·M))` and `p = a / (1 − e²)`.

use crate::data::model::SampleTable;

/// Newtonian constant of gravitation, m³ kg⁻¹ s⁻².
pub const G_SI: f64 = 6.67408e-11;

pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// Largest RK4 step in scaled time.
const MAX_STEP: f64 = 1.0e-3;

/// Parameters of a bound two-body orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Total mass, kg.
    pub mass: f64,
    /// Semi-major axis, m.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Longitude of pericenter, rad.
    pub omega: f64,
    /// Phase at the first time stamp.
    pub phi0: f64,
}

impl Default for Orbit {
    /// The Sun–Earth system.
    fn default() -> Self {
        Self {
            mass: 1.9884e30,
            semi_major_axis: 1.49598e11,
            eccentricity: 0.0167,
            omega: 0.0,
            phi0: 0.0,
        }
    }
}

impl Orbit {
    /// Semi-latus rectum `p`, m.
    pub fn semi_latus_rectum(&self) -> f64 {
        let e = self.eccentricity;
        self.semi_major_axis / (1.0 - e * e)
    }

    /// Time scale `t*`, s.
    pub fn time_scale(&self) -> f64 {
        let p = self.semi_latus_rectum();
        (p * p * p / (G_SI * self.mass)).sqrt()
    }

    fn phidot(&self, phi: f64) -> f64 {
        let out = 1.0 + self.eccentricity * (phi - self.omega).cos();
        out * out
    }

    fn rk4_step(&self, phi: f64, h: f64) -> f64 {
        let k1 = self.phidot(phi);
        let k2 = self.phidot(phi + 0.5 * h * k1);
        let k3 = self.phidot(phi + 0.5 * h * k2);
        let k4 = self.phidot(phi + h * k3);
        phi + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
    }

    /// Phase at each of `times` (seconds), starting from `phi0` at `times[0]`.
    pub fn evolve(&self, times: &[f64]) -> Vec<f64> {
        let Some(&first) = times.first() else {
            return Vec::new();
        };
        let t_star = self.time_scale();
        log::debug!("p = {} m, t* = {t_star} s", self.semi_latus_rectum());

        let mut phi = Vec::with_capacity(times.len());
        let mut y = self.phi0;
        let mut last = first / t_star;
        phi.push(y);

        for &t in &times[1..] {
            let tau = t / t_star;
            let span = tau - last;
            let steps = (span.abs() / MAX_STEP).ceil().max(1.0) as usize;
            let h = span / steps as f64;
            for _ in 0..steps {
                y = self.rk4_step(y, h);
            }
            phi.push(y);
            last = tau;
        }
        phi
    }

    /// Sample the phase once per day for `days` days, day 0 included.
    pub fn daily_table(&self, days: u32) -> SampleTable {
        let times: Vec<f64> = (0..=days).map(|d| d as f64 * SECONDS_PER_DAY).collect();
        let phi = self.evolve(&times);
        SampleTable::from_rows(times.into_iter().zip(phi))
    }
}
