pub mod serve;
pub mod synthesize;
pub mod version;
