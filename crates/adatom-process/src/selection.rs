//! One-time strategy selection.

use crate::execution::{ExecutionKind, Incorporation};
use crate::rule::RuleKind;

/// The rule, execution and incorporation variants of a process.
///
/// Resolved once when the process is initialized and fixed for its
/// lifetime. Rule and execution are paired, not chosen independently:
///
/// | species | footprint | rule | execution |
/// |---|---|---|---|
/// | single | 1 | `Basic` | `SingleSpeciesSingleSite` |
/// | single | >1 | `Basic` | `SingleSpeciesMultiSite` |
/// | multi | 1 | `MultiSpeciesSingleSite` | `MultiSpeciesSingleSite` |
/// | multi | >1 | `MultiSpeciesFootprint` | `MultiSpeciesMultiSite` |
///
/// The unconditional override replaces only the rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrategySelection {
    /// Applicability rule.
    pub rule: RuleKind,
    /// Execution strategy.
    pub execution: ExecutionKind,
    /// Adlayer or film growth.
    pub incorporation: Incorporation,
}

impl StrategySelection {
    /// Derive the selection.
    ///
    /// `growth` is set when the adsorbed species is the surface species.
    pub fn resolve(multi_species: bool, footprint: u32, unconditional: bool, growth: bool) -> Self {
        let multi_site = footprint > 1;
        let (rule, execution) = match (multi_species, multi_site) {
            (false, false) => (RuleKind::Basic, ExecutionKind::SingleSpeciesSingleSite),
            (false, true) => (RuleKind::Basic, ExecutionKind::SingleSpeciesMultiSite),
            (true, false) => (
                RuleKind::MultiSpeciesSingleSite,
                ExecutionKind::MultiSpeciesSingleSite,
            ),
            (true, true) => (
                RuleKind::MultiSpeciesFootprint,
                ExecutionKind::MultiSpeciesMultiSite,
            ),
        };
        Self {
            rule: if unconditional {
                RuleKind::Unconditional
            } else {
                rule
            },
            execution,
            incorporation: if growth {
                Incorporation::Growth
            } else {
                Incorporation::Adlayer
            },
        }
    }
}
