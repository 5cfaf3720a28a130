use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::ats::scorer::AtsScorer;
use crate::config::Config;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis client reserved for a future async export job queue.
    #[allow(dead_code)]
    pub redis: RedisClient,
    pub s3: S3Client,
    pub config: Config,
    /// Pluggable ATS scorer. Default: KeywordAtsScorer. Swap via ATS_SCORER env.
    pub ats_scorer: Arc<dyn AtsScorer>,
    /// Page geometry and font metrics used by the PDF exporter.
    pub page_config: PageConfig,
}
