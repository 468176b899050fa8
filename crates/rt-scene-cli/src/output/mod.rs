mod json;
mod summary;

pub use json::JsonOutput;
pub use summary::SummaryOutput;
