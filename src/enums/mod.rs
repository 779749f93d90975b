mod classification;
mod status_change;

pub use classification::Classification;
pub use status_change::StatusChange;
