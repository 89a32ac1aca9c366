//! Rate-law strategies.
//!
//! A rate law is a pure function of its configured parameters and the
//! ambient [`Environment`]. Processes evaluate it once at initialization
//! (and again only when the environment changes) and cache the result.

use adatom_core::constants::{AVOGADRO, BOLTZMANN_EV, BOLTZMANN_J};
use adatom_core::{ConfigError, Environment, RateError};
use std::f64::consts::PI;

/// The configured rate law of a process, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateLaw {
    /// A fixed rate [events/s], e.g. `constant 1.0`.
    Constant {
        /// The rate returned on every call.
        rate: f64,
    },
    /// Kinetic-theory impingement rate scaled by a sticking coefficient:
    /// `s0 * f * P / (c_tot * sqrt(2π m kB T))` with `m = MW / N_A`.
    Simple {
        /// Sticking coefficient `s0` [-].
        sticking: f64,
        /// Molar fraction `f` of the species in the gas phase [-].
        molar_fraction: f64,
        /// Total site concentration `c_tot` [sites/m²].
        site_concentration: f64,
        /// Molecular weight `MW` [kg/mol].
        molecular_weight: f64,
    },
    /// `v0 * A * exp(-n E / kB T)` with `A = exp((E - Em) / kB T)`.
    Arrhenius {
        /// Attempt frequency `v0` [1/s].
        frequency: f64,
        /// Activation energy `E` [eV].
        energy: f64,
        /// Reference (migration) energy `Em` [eV].
        reference_energy: f64,
        /// Stoichiometric or site-count exponent `n` [-].
        exponent: f64,
    },
}

impl RateLaw {
    /// Keyword that selects this law in a token list.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Simple { .. } => "simple",
            Self::Arrhenius { .. } => "arrhenius",
        }
    }

    /// Parse a keyword-first token list.
    ///
    /// Returns the law and the number of tokens consumed, so callers can
    /// continue with trailing option tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use adatom_process::RateLaw;
    ///
    /// let (law, used) = RateLaw::parse(&["constant", "2.5", "sites=1"]).unwrap();
    /// assert_eq!(law, RateLaw::Constant { rate: 2.5 });
    /// assert_eq!(used, 2);
    /// ```
    pub fn parse(tokens: &[&str]) -> Result<(Self, usize), ConfigError> {
        let Some(keyword) = tokens.first() else {
            return Err(ConfigError::MissingParameter {
                law: "process",
                parameter: "rate law keyword",
            });
        };
        let mut args = Args::new(&tokens[1..]);
        let law = match keyword.trim().to_ascii_lowercase().as_str() {
            "constant" => {
                let law = "constant";
                Self::Constant {
                    rate: args.next(law, "rate")?,
                }
            }
            "simple" => {
                let law = "simple";
                Self::Simple {
                    sticking: args.next(law, "sticking coefficient")?,
                    molar_fraction: args.next(law, "molar fraction")?,
                    site_concentration: args.next(law, "site concentration")?,
                    molecular_weight: args.next(law, "molecular weight")?,
                }
            }
            "arrhenius" => {
                let law = "arrhenius";
                Self::Arrhenius {
                    frequency: args.next(law, "frequency")?,
                    energy: args.next(law, "activation energy")?,
                    reference_energy: args.next(law, "reference energy")?,
                    exponent: args.next(law, "exponent")?,
                }
            }
            _ => {
                return Err(ConfigError::UnknownRateLaw {
                    keyword: keyword.to_string(),
                })
            }
        };
        Ok((law, 1 + args.consumed))
    }

    /// Evaluate the law. May return a negative or non-finite value for
    /// non-physical parameters; [`checked`](Self::checked) rejects those.
    pub fn evaluate(&self, env: &Environment) -> f64 {
        let t = env.temperature();
        match *self {
            Self::Constant { rate } => rate,
            Self::Simple {
                sticking,
                molar_fraction,
                site_concentration,
                molecular_weight,
            } => {
                let mass = molecular_weight / AVOGADRO;
                let flux = env.pressure() / (2.0 * PI * mass * BOLTZMANN_J * t).sqrt();
                sticking * molar_fraction * flux / site_concentration
            }
            Self::Arrhenius {
                frequency,
                energy,
                reference_energy,
                exponent,
            } => {
                let kt = BOLTZMANN_EV * t;
                // A * exp(-nE/kT) folded into one exponent so a large A
                // cannot overflow before the Boltzmann factor is applied.
                frequency * (((energy - reference_energy) - exponent * energy) / kt).exp()
            }
        }
    }

    /// Evaluate and reject negative or non-finite rates.
    pub fn checked(&self, process: &str, env: &Environment) -> Result<f64, RateError> {
        let value = self.evaluate(env);
        if value.is_finite() && value >= 0.0 {
            return Ok(value);
        }
        Err(RateError {
            process: process.to_string(),
            law: self.keyword(),
            parameters: self.describe(env),
            value,
        })
    }

    /// Parameter dump for diagnostics.
    pub fn describe(&self, env: &Environment) -> String {
        let conditions = format!("T={} K, P={} Pa", env.temperature(), env.pressure());
        match self {
            Self::Constant { rate } => format!("rate={rate}; {conditions}"),
            Self::Simple {
                sticking,
                molar_fraction,
                site_concentration,
                molecular_weight,
            } => format!(
                "s0={sticking}, f={molar_fraction}, c_tot={site_concentration}, \
                 MW={molecular_weight}; {conditions}"
            ),
            Self::Arrhenius {
                frequency,
                energy,
                reference_energy,
                exponent,
            } => format!(
                "v0={frequency}, E={energy} eV, Em={reference_energy} eV, n={exponent}; {conditions}"
            ),
        }
    }
}

/// Cursor over numeric rate-law arguments.
struct Args<'a> {
    tokens: &'a [&'a str],
    consumed: usize,
}

impl<'a> Args<'a> {
    fn new(tokens: &'a [&'a str]) -> Self {
        Self {
            tokens,
            consumed: 0,
        }
    }

    fn next(&mut self, law: &'static str, parameter: &'static str) -> Result<f64, ConfigError> {
        let token = self
            .tokens
            .get(self.consumed)
            .ok_or(ConfigError::MissingParameter { law, parameter })?;
        let value = token
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConfigError::InvalidNumber {
                law,
                parameter,
                token: token.to_string(),
            })?;
        self.consumed += 1;
        Ok(value)
    }
}
