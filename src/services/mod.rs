pub mod mood;
pub mod providers;
pub mod recommendations;
pub mod selection;
pub mod trailer;
