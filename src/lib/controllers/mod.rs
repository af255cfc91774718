pub mod custodial;
pub mod dashboard;
