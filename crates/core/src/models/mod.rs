pub mod chart;
pub mod coin;
pub mod market;
pub mod price;
pub mod settings;
pub mod table;
