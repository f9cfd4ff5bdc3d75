pub mod attachment;
pub mod category;
pub mod chapter;
pub mod course;
pub mod purchase;
pub mod user_progress;
pub mod video_asset;
