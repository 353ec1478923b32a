pub mod location;
pub mod page_layout;
pub mod weather_record;
