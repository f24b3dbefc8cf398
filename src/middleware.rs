pub mod required_headers;
