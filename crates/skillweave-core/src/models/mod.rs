mod cascade_result;
mod health;
mod leverage;
mod risk_finding;

pub use cascade_result::{CascadeDirection, CascadeResult};
pub use health::{HealthReport, HealthStats};
pub use leverage::LeverageScore;
pub use risk_finding::{RiskFinding, RiskType};
