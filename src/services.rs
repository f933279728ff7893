pub mod cloudinary;
pub mod media_store;
