pub mod api_failure;
