//! S3/MinIO storage for exported PDFs.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// One stable key per (user, resume): re-exports overwrite the previous PDF.
pub fn pdf_object_key(user_id: Uuid, resume_id: Uuid) -> String {
    format!("exports/{user_id}/{resume_id}.pdf")
}

pub async fn store_pdf(
    s3: &S3Client,
    bucket: &str,
    key: &str,
    bytes: Vec<u8>,
) -> Result<(), AppError> {
    let size = bytes.len();
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/pdf")
        .body(ByteStream::from(bytes))
        .send()
        .await
        .map_err(|e| AppError::S3(e.to_string()))?;

    info!("Stored exported PDF at s3://{bucket}/{key} ({size} bytes)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_object_key_shape() {
        let user = Uuid::nil();
        let resume = Uuid::nil();
        assert_eq!(
            pdf_object_key(user, resume),
            format!("exports/{user}/{resume}.pdf")
        );
    }
}
