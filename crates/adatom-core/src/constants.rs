//! Physical constants used by the rate laws (CODATA 2018 exact values).

/// Boltzmann constant [J/K].
pub const BOLTZMANN_J: f64 = 1.380_649e-23;

/// Boltzmann constant [eV/K].
pub const BOLTZMANN_EV: f64 = 8.617_333_262e-5;

/// Avogadro constant [1/mol].
pub const AVOGADRO: f64 = 6.022_140_76e23;
