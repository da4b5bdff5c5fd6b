pub mod datetime_ops;
pub mod geo_ops;
