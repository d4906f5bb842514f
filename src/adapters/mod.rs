pub mod api_client;
pub mod csv_source;
