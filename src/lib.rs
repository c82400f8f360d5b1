pub mod model;
pub mod output;
pub mod providers;
pub mod reports;
