pub mod entity;
pub mod temp_view;
pub mod users;
