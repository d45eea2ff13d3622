pub mod chart_service;
pub mod feed_service;
pub mod summary_service;
pub mod table_service;
