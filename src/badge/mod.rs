pub mod patch;
pub mod rules;
