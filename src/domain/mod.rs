pub mod money;
pub mod sheets;
pub mod subscription;
