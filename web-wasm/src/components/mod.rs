pub mod disclaimer;
pub mod results;
pub mod upload_area;
