use std::fmt;

use skillweave_core::DomainId;

/// Why a pass produced nothing for some input. Never an error; logged at
/// `debug` so quiet results can be explained after the fact.
#[derive(Debug, Clone, PartialEq)]
pub enum Suppression {
    /// Regression needs at least one snapshot to compare against.
    NoBaseline,
    /// Too few assessed observations of a domain to judge a plateau.
    TooFewObservations {
        domain: DomainId,
        observed: usize,
        required: usize,
    },
    /// Snapshots do not yet cover the minimum stalling window.
    SpanTooShort {
        domain: DomainId,
        days: i64,
        required: i64,
    },
    /// The strongest bottleneck is below the significance threshold.
    BelowSignificance { domain: DomainId, leverage: f64 },
    /// No domain qualifies as a bottleneck.
    NoBottleneck,
}

impl fmt::Display for Suppression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBaseline => f.write_str("no snapshot to compare against"),
            Self::TooFewObservations {
                domain,
                observed,
                required,
            } => write!(
                f,
                "{domain}: {observed} assessed observations, {required} required"
            ),
            Self::SpanTooShort {
                domain,
                days,
                required,
            } => write!(f, "{domain}: history spans {days} days, {required} required"),
            Self::BelowSignificance { domain, leverage } => {
                write!(f, "{domain}: leverage {leverage:.3} below significance")
            }
            Self::NoBottleneck => f.write_str("no domain is holding anything back"),
        }
    }
}
