//! # shelvia-storage
//!
//! Attachment blob storage for defect records.
//!
//! Blobs are kept in a single flat directory, one file per attachment, named
//! after the [`AttachmentKey`](shelvia_core::AttachmentKey) storage name.

pub mod fs;

pub use fs::FsAttachmentStore;
