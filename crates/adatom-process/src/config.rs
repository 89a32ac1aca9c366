//! Process configuration: the typed builder and the token grammar.
//!
//! A process is configured either from an ordered token list (the path the
//! registry and input files use) or through [`ProcessConfig::builder`].
//! Both produce the same immutable [`ProcessConfig`].
//!
//! Token grammar:
//!
//! ```text
//! tokens  := law option*
//! law     := "constant" rate
//!          | "simple" s0 f c_tot MW
//!          | "arrhenius" v0 E Em n
//! option  := "species=" label | "sites=" n | "footprint=" ("fixed" | "first-fit")
//!          | "step=" n | "unconditional"
//! ```

use crate::execution::Incorporation;
use crate::geometry::StepPolicy;
use crate::rate::RateLaw;
use adatom_core::ConfigError;

/// How a multi-site footprint is chosen among the target's neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FootprintPolicy {
    /// The first `size - 1` distinct neighbours, all of which must be empty
    /// and level.
    Fixed,
    /// The first `size - 1` distinct neighbours that are empty and level.
    #[default]
    FirstFit,
}

impl FootprintPolicy {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "fixed" => Some(Self::Fixed),
            "first-fit" | "firstfit" => Some(Self::FirstFit),
            _ => None,
        }
    }
}

/// Size and selection policy of a species footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FootprintShape {
    size: u32,
    policy: FootprintPolicy,
}

impl FootprintShape {
    /// A footprint covering `size` sites. Rejects zero.
    pub fn new(size: u32, policy: FootprintPolicy) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidFootprint { value: 0 });
        }
        Ok(Self { size, policy })
    }

    /// Number of sites covered.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the adsorbate covers more than one site.
    #[inline]
    pub fn is_multi_site(&self) -> bool {
        self.size > 1
    }

    /// Neighbour selection policy.
    #[inline]
    pub fn policy(&self) -> FootprintPolicy {
        self.policy
    }
}

/// Immutable configuration of one process definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessConfig {
    species: String,
    footprint: FootprintShape,
    rate_law: RateLaw,
    step_policy: StepPolicy,
    incorporation: Option<Incorporation>,
    unconditional: bool,
}

/// Builder for [`ProcessConfig`].
///
/// Required: `species` and `rate_law`. The footprint defaults to one site
/// with [`FootprintPolicy::FirstFit`], the step policy to a one-layer
/// threshold, and the applicability rule is derived (not unconditional).
#[derive(Clone, Debug, Default)]
pub struct ProcessConfigBuilder {
    species: Option<String>,
    footprint: Option<i64>,
    footprint_policy: FootprintPolicy,
    rate_law: Option<RateLaw>,
    step_policy: StepPolicy,
    incorporation: Option<Incorporation>,
    unconditional: bool,
}

impl ProcessConfig {
    /// Create a new builder.
    ///
    /// ```
    /// use adatom_process::{ProcessConfig, RateLaw};
    ///
    /// let config = ProcessConfig::builder()
    ///     .species("H")
    ///     .rate_law(RateLaw::Constant { rate: 2.5 })
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.footprint().size(), 1);
    /// ```
    pub fn builder() -> ProcessConfigBuilder {
        ProcessConfigBuilder::default()
    }

    /// Parse a keyword-first token list on top of `base`.
    ///
    /// `base` carries values set before parsing (e.g. through
    /// [`Adsorption::set_adsorbed`](crate::Adsorption::set_adsorbed)); option
    /// tokens override them.
    pub fn from_tokens(tokens: &[&str], base: ProcessConfigBuilder) -> Result<Self, ConfigError> {
        let (law, used) = RateLaw::parse(tokens)?;
        let mut builder = base.rate_law(law);
        for token in &tokens[used..] {
            builder = builder.apply_option(token.trim())?;
        }
        builder.build()
    }

    /// Label of the adsorbed species.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Footprint of the adsorbed species.
    pub fn footprint(&self) -> FootprintShape {
        self.footprint
    }

    /// Configured rate law.
    pub fn rate_law(&self) -> &RateLaw {
        &self.rate_law
    }

    /// Step-membership threshold.
    pub fn step_policy(&self) -> StepPolicy {
        self.step_policy
    }

    /// Explicit incorporation mode. `None` derives it from the species:
    /// adsorbing the surface species grows the film.
    pub fn incorporation(&self) -> Option<Incorporation> {
        self.incorporation
    }

    /// Whether the applicability rule is overridden with the unconditional one.
    pub fn is_unconditional(&self) -> bool {
        self.unconditional
    }
}

impl ProcessConfigBuilder {
    /// Set the adsorbed species label.
    pub fn species(mut self, label: impl Into<String>) -> Self {
        self.species = Some(label.into());
        self
    }

    /// Set the number of sites the species covers.
    pub fn footprint(mut self, sites: i64) -> Self {
        self.footprint = Some(sites);
        self
    }

    /// Set how multi-site footprints are chosen.
    pub fn footprint_policy(mut self, policy: FootprintPolicy) -> Self {
        self.footprint_policy = policy;
        self
    }

    /// Set the rate law.
    pub fn rate_law(mut self, law: RateLaw) -> Self {
        self.rate_law = Some(law);
        self
    }

    /// Set the step-membership threshold.
    pub fn step_policy(mut self, policy: StepPolicy) -> Self {
        self.step_policy = policy;
        self
    }

    /// Force adlayer or growth incorporation.
    pub fn incorporation(mut self, mode: Incorporation) -> Self {
        self.incorporation = Some(mode);
        self
    }

    /// Replace the derived applicability rule with the unconditional one.
    pub fn unconditional(mut self, enabled: bool) -> Self {
        self.unconditional = enabled;
        self
    }

    fn apply_option(self, token: &str) -> Result<Self, ConfigError> {
        if token == "unconditional" {
            return Ok(self.unconditional(true));
        }
        let unknown = || ConfigError::UnknownOption {
            token: token.to_string(),
        };
        let (key, value) = token.split_once('=').ok_or_else(unknown)?;
        let value = value.trim();
        match key.trim() {
            "species" => Ok(self.species(value)),
            "sites" => Ok(self.footprint(parse_integer("sites", value)?)),
            "footprint" => FootprintPolicy::parse(value)
                .map(|p| self.footprint_policy(p))
                .ok_or_else(unknown),
            "step" => {
                let threshold = parse_integer("step", value)?;
                let min_height_difference = i32::try_from(threshold)
                    .ok()
                    .filter(|&d| d >= StepPolicy::MIN_HEIGHT_DIFFERENCE)
                    .ok_or_else(|| ConfigError::InvalidNumber {
                        law: "option",
                        parameter: "step",
                        token: value.to_string(),
                    })?;
                Ok(self.step_policy(StepPolicy {
                    min_height_difference,
                }))
            }
            _ => Err(unknown()),
        }
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<ProcessConfig, ConfigError> {
        let species = self
            .species
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::SpeciesUnset)?;
        let sites = self.footprint.unwrap_or(1);
        let size = u32::try_from(sites)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(ConfigError::InvalidFootprint { value: sites })?;
        let rate_law = self.rate_law.ok_or(ConfigError::MissingParameter {
            law: "process",
            parameter: "rate law keyword",
        })?;
        if !self.step_policy.is_valid() {
            return Err(ConfigError::InvalidStepThreshold {
                value: self.step_policy.min_height_difference,
            });
        }
        Ok(ProcessConfig {
            species,
            footprint: FootprintShape::new(size, self.footprint_policy)?,
            rate_law,
            step_policy: self.step_policy,
            incorporation: self.incorporation,
            unconditional: self.unconditional,
        })
    }
}

fn parse_integer(parameter: &'static str, token: &str) -> Result<i64, ConfigError> {
    token.parse::<i64>().map_err(|_| ConfigError::InvalidNumber {
        law: "option",
        parameter,
        token: token.to_string(),
    })
}
