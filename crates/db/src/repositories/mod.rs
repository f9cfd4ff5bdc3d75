pub mod attachment_repo;
pub mod category_repo;
pub mod chapter_repo;
pub mod course_repo;
pub mod purchase_repo;
pub mod user_progress_repo;
pub mod video_asset_repo;

pub use attachment_repo::AttachmentRepo;
pub use category_repo::CategoryRepo;
pub use chapter_repo::ChapterRepo;
pub use course_repo::CourseRepo;
pub use purchase_repo::PurchaseRepo;
pub use user_progress_repo::UserProgressRepo;
pub use video_asset_repo::VideoAssetRepo;
