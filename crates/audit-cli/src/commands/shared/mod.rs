pub mod criteria;
pub mod limit;
