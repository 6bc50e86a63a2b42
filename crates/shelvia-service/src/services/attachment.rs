//! Attachment service
//!
//! Uploads, listings and downloads of files attached to a defect. Names are
//! always resolved through [`AttachmentKey`], so a request can only reach
//! files carrying its own defect prefix.

use shelvia_core::entities::{AttachmentKey, AuditAction, NewAuditEntry};
use shelvia_core::{DefectId, DomainError};
use tracing::{info, instrument};

use crate::dto::UploadResponse;

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// A downloaded attachment
#[derive(Debug, Clone)]
pub struct AttachmentFile {
    /// Storage name
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Attachment service
pub struct AttachmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttachmentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded file; an existing file with the same name is replaced
    #[instrument(skip(self, actor, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        actor: &str,
        defect_id: DefectId,
        original_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<UploadResponse> {
        let key = AttachmentKey::new(defect_id, original_name)?;
        let filename = self.ctx.attachment_store().put(&key, bytes).await?;

        AuditService::new(self.ctx)
            .record(
                NewAuditEntry::new(
                    AuditAction::UploadFile,
                    actor,
                    format!("/defect/{defect_id}/upload"),
                    "POST",
                )
                .with_target(defect_id)
                .with_payload(&serde_json::json!({ "filename": filename })),
            )
            .await;

        info!(defect_id = %defect_id, filename = %filename, "File uploaded");

        Ok(UploadResponse::stored(filename))
    }

    /// Storage names of a defect's attachments, sorted
    #[instrument(skip(self))]
    pub async fn list(&self, defect_id: DefectId) -> ServiceResult<Vec<String>> {
        Ok(self.ctx.attachment_store().list(defect_id).await?)
    }

    /// Read an attachment by storage name
    #[instrument(skip(self))]
    pub async fn retrieve(&self, defect_id: DefectId, filename: &str) -> ServiceResult<AttachmentFile> {
        let key = AttachmentKey::from_storage_name(defect_id, filename)?;

        let bytes = self
            .ctx
            .attachment_store()
            .get(&key)
            .await?
            .ok_or_else(|| DomainError::FileNotFound(filename.to_string()))?;

        Ok(AttachmentFile {
            filename: key.storage_name(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_context;

    #[tokio::test]
    async fn test_upload_list_retrieve() {
        let (ctx, dir) = test_context().await;
        let service = AttachmentService::new(&ctx);
        let id = DefectId::new(7);

        let response = service.upload("key", id, "photo.png", b"\x89PNG").await.unwrap();
        assert!(response.ok);
        assert_eq!(response.filename, "defect_7_photo.png");
        assert!(dir.path().join("defect_7_photo.png").exists());

        assert_eq!(service.list(id).await.unwrap(), vec!["defect_7_photo.png"]);

        let file = service.retrieve(id, "defect_7_photo.png").await.unwrap();
        assert_eq!(file.bytes, b"\x89PNG");
        assert_eq!(file.filename, "defect_7_photo.png");

        let audit = ctx.audit_repo().find_by_target(id).await.unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].action, "upload_file");
        assert_eq!(audit[0].endpoint, "/defect/7/upload");
        assert_eq!(audit[0].payload.as_deref(), Some(r#"{"filename":"defect_7_photo.png"}"#));
    }

    #[tokio::test]
    async fn test_retrieve_other_defects_file_is_forbidden() {
        let (ctx, _dir) = test_context().await;
        let service = AttachmentService::new(&ctx);
        service.upload("key", DefectId::new(3), "photo.png", b"x").await.unwrap();

        let err = service
            .retrieve(DefectId::new(7), "defect_3_photo.png")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "FILE_ACCESS_DENIED");
    }

    #[tokio::test]
    async fn test_retrieve_missing_file() {
        let (ctx, _dir) = test_context().await;
        let err = AttachmentService::new(&ctx)
            .retrieve(DefectId::new(7), "defect_7_missing.png")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_FILE");
    }

    #[tokio::test]
    async fn test_traversal_is_rejected_before_writing() {
        let (ctx, dir) = test_context().await;
        let service = AttachmentService::new(&ctx);

        for name in ["../escape.txt", "sub/dir.txt", "..", "a\\b.txt", ""] {
            let err = service.upload("key", DefectId::new(1), name, b"x").await.unwrap_err();
            assert_eq!(err.status_code(), 422, "{name:?} should be rejected");
        }

        let err = service
            .retrieve(DefectId::new(1), "defect_1_../../etc/passwd")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 422);

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(ctx.audit_repo().list(Default::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_without_uploads_is_empty() {
        let (ctx, _dir) = test_context().await;
        assert!(AttachmentService::new(&ctx).list(DefectId::new(1)).await.unwrap().is_empty());
    }
}
