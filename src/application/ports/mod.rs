mod blob_store;
mod id_generator;
mod upload_index;

pub use blob_store::{BlobStore, StorageError};
pub use id_generator::{IdGenerator, RandomIdGenerator};
pub use upload_index::{IndexError, UploadIndex};

#[cfg(test)]
pub use blob_store::MockBlobStore;
#[cfg(test)]
pub use id_generator::MockIdGenerator;
#[cfg(test)]
pub use upload_index::MockUploadIndex;
