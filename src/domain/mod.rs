pub mod course;
pub mod site_profile;
pub mod text;
