pub mod prediction;
pub mod sensor;
pub mod workflow;
