pub mod deep_dive;
pub mod nhs_adult;
