mod sqlite_upload_index;

pub use sqlite_upload_index::SqliteUploadIndex;
