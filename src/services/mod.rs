pub mod enrichment;
pub mod providers;
pub mod ranking;
pub mod recommendations;
