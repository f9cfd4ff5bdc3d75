pub mod attachment;
pub mod browse;
pub mod category;
pub mod chapter;
pub mod course;
pub mod player;
