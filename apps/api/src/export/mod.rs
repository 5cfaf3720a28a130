// Export adapter: VisualTree → single-page A4 PDF → S3.
// Composition is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod pdf;
pub mod storage;
