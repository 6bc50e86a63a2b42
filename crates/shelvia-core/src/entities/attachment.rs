//! Attachment key - structured identity of a file attached to a defect
//!
//! Files live in a flat namespace under the storage name
//! `defect_{id}_{original_name}`. The key is always built from the
//! `{defect_id, original_name}` pair, and the original name is checked for
//! path separators and parent-directory sequences before it can reach the
//! filesystem.

use crate::error::DomainError;
use crate::value_objects::DefectId;

/// Longest storage name accepted (common filesystem limit, in bytes)
const MAX_STORAGE_NAME_LEN: usize = 255;

/// Identity of an attachment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentKey {
    defect_id: DefectId,
    original_name: String,
}

impl AttachmentKey {
    /// Build a key from an uploaded file name
    pub fn new(defect_id: DefectId, original_name: impl Into<String>) -> Result<Self, DomainError> {
        let original_name = original_name.into();
        validate_original_name(&original_name)?;

        let key = Self {
            defect_id,
            original_name,
        };
        if key.storage_name().len() > MAX_STORAGE_NAME_LEN {
            return Err(DomainError::InvalidFilename(format!(
                "stored name exceeds {MAX_STORAGE_NAME_LEN} bytes"
            )));
        }
        Ok(key)
    }

    /// Resolve a storage name requested for `defect_id`
    ///
    /// A name belonging to another defect is rejected with `FileAccessDenied`.
    pub fn from_storage_name(defect_id: DefectId, storage_name: &str) -> Result<Self, DomainError> {
        let original = storage_name
            .strip_prefix(&Self::prefix(defect_id))
            .ok_or_else(|| DomainError::FileAccessDenied {
                defect_id,
                filename: storage_name.to_string(),
            })?;

        Self::new(defect_id, original)
    }

    /// Storage-name prefix shared by every attachment of a defect
    pub fn prefix(defect_id: DefectId) -> String {
        format!("defect_{defect_id}_")
    }

    /// Derived flat storage name
    pub fn storage_name(&self) -> String {
        format!("{}{}", Self::prefix(self.defect_id), self.original_name)
    }

    pub fn defect_id(&self) -> DefectId {
        self.defect_id
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }
}

fn validate_original_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidFilename("filename is empty".to_string()));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(DomainError::InvalidFilename(format!(
            "filename contains a path separator: {name}"
        )));
    }
    if name == "." || name == ".." {
        return Err(DomainError::InvalidFilename(format!(
            "filename is a directory reference: {name}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_name() {
        let key = AttachmentKey::new(DefectId::new(7), "photo.png").unwrap();
        assert_eq!(key.storage_name(), "defect_7_photo.png");
        assert_eq!(key.original_name(), "photo.png");
    }

    #[test]
    fn test_from_storage_name_round_trip() {
        let key = AttachmentKey::from_storage_name(DefectId::new(7), "defect_7_photo.png").unwrap();
        assert_eq!(key.defect_id(), DefectId::new(7));
        assert_eq!(key.original_name(), "photo.png");
    }

    #[test]
    fn test_wrong_prefix_is_denied() {
        let err =
            AttachmentKey::from_storage_name(DefectId::new(7), "defect_3_photo.png").unwrap_err();
        assert!(err.is_authorization());

        // defect 1 must not reach defect 12's files through a shared prefix
        let err =
            AttachmentKey::from_storage_name(DefectId::new(1), "defect_12_photo.png").unwrap_err();
        assert!(err.is_authorization());
    }

    #[test]
    fn test_rejects_traversal() {
        let id = DefectId::new(7);
        assert!(AttachmentKey::new(id, "../etc/passwd").is_err());
        assert!(AttachmentKey::new(id, "..").is_err());
        assert!(AttachmentKey::new(id, "a/b.png").is_err());
        assert!(AttachmentKey::new(id, "a\\b.png").is_err());
        assert!(AttachmentKey::new(id, "").is_err());

        let err = AttachmentKey::from_storage_name(id, "defect_7_..").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_accepts_dots_inside_name() {
        let key = AttachmentKey::new(DefectId::new(7), "report..v2.pdf").unwrap();
        assert_eq!(key.storage_name(), "defect_7_report..v2.pdf");
        assert!(AttachmentKey::new(DefectId::new(7), "...").is_ok());
        assert!(AttachmentKey::new(DefectId::new(7), ".").is_err());
    }

    #[test]
    fn test_rejects_overlong_name() {
        let name = "x".repeat(300);
        assert!(AttachmentKey::new(DefectId::new(1), name).is_err());
    }
}
