//! Error types shared by the adatom crates.
//!
//! Configuration problems ([`ConfigError`]) and non-physical rates
//! ([`RateError`]) are both fatal: the simulation must not proceed past
//! initialization with either.

use thiserror::Error;

/// Errors detected while configuring a process or its environment.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The leading rate-law keyword is not recognized.
    #[error("unknown rate law '{keyword}' (expected constant, simple or arrhenius)")]
    UnknownRateLaw {
        /// The keyword as given.
        keyword: String,
    },
    /// The token list is empty or ends before a required parameter.
    #[error("rate law '{law}' is missing parameter '{parameter}'")]
    MissingParameter {
        /// Rate law being parsed.
        law: &'static str,
        /// Name of the absent parameter.
        parameter: &'static str,
    },
    /// A parameter token could not be parsed as a finite number.
    #[error("parameter '{parameter}' of rate law '{law}' is not a finite number: '{token}'")]
    InvalidNumber {
        /// Rate law being parsed.
        law: &'static str,
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The raw token.
        token: String,
    },
    /// The species footprint must cover at least one site.
    #[error("footprint must cover at least one site, got {value}")]
    InvalidFootprint {
        /// The configured size.
        value: i64,
    },
    /// A step threshold below one layer classifies every site as a step.
    #[error("step threshold must be at least one layer, got {value}")]
    InvalidStepThreshold {
        /// The configured `min_height_difference`.
        value: i32,
    },
    /// No species label was configured before `init`.
    #[error("species label is unset")]
    SpeciesUnset,
    /// The configured species is not part of the simulation's species table.
    #[error("species '{label}' is not registered in the species table")]
    UnknownSpecies {
        /// The label as given.
        label: String,
    },
    /// A trailing option token was not understood.
    #[error("unrecognized option token '{token}'")]
    UnknownOption {
        /// The raw token.
        token: String,
    },
    /// `init` was called on an already-initialized process.
    #[error("process '{name}' is already initialized")]
    AlreadyInitialized {
        /// Process name.
        name: String,
    },
    /// Temperature or pressure is out of range.
    #[error("invalid environment: {reason}")]
    InvalidEnvironment {
        /// Which value was rejected and why.
        reason: String,
    },
    /// A process name was registered twice.
    #[error("process '{name}' is already registered")]
    DuplicateProcess {
        /// The duplicated name.
        name: String,
    },
    /// No factory is registered under the requested name.
    #[error("no process registered under '{name}'")]
    UnknownProcess {
        /// The requested name.
        name: String,
    },
}

/// A rate law produced a negative or non-finite value.
///
/// This indicates a modelling or configuration mistake, not a recoverable
/// runtime fault. The message names the process, the law, and its
/// parameters so the offending input can be located.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("process '{process}' computed non-physical rate {value} from {law} law ({parameters})")]
pub struct RateError {
    /// Name of the process that computed the rate.
    pub process: String,
    /// Rate-law keyword.
    pub law: &'static str,
    /// Human-readable parameter dump.
    pub parameters: String,
    /// The rejected value.
    pub value: f64,
}

/// Any fatal error raised while setting up a process.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ProcessError {
    /// Configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The configured rate law is non-physical.
    #[error("rate error: {0}")]
    Rate(#[from] RateError),
}
