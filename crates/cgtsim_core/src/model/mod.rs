mod inflation;
mod price;
mod scenario;

pub use inflation::{InflationRecord, InflationTable};
pub use price::{PriceObservation, PriceSeries};
pub use scenario::{GainProfile, Scenario};
