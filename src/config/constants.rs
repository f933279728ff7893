/// Logical folder every upload is tagged with on the remote store.
pub const UPLOAD_FOLDER: &str = "offers";

/// Base URL of the Cloudinary REST API, versioned per their docs.
pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Result code Cloudinary returns for a successful destroy call.
pub const DELETE_SUCCESS_RESULT: &str = "ok";

/// Upper bound for incoming JSON bodies (10MB).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Port the development server binds when `MEDIA_GATEWAY_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
