pub mod courses;
pub mod generate;
