use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tentertain_core_health_contracts::{HealthFeatureService, HealthStatus};
use tentertain_extern_contracts::emailjs::EmailJsApiService;
use tokio::sync::RwLock;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Mailer> {
    mailer: Mailer,
    config: HealthFeatureConfig,
    state: Arc<State>,
}

#[derive(Debug, Clone)]
pub struct HealthFeatureConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default)]
struct State {
    cache: RwLock<Option<CachedStatus>>,
}

#[derive(Debug)]
struct CachedStatus {
    status: HealthStatus,
    timestamp: Instant,
}

impl<Mailer> HealthFeatureServiceImpl<Mailer> {
    pub fn new(mailer: Mailer, config: HealthFeatureConfig) -> Self {
        Self {
            mailer,
            config,
            state: Default::default(),
        }
    }
}

impl<Mailer> HealthFeatureService for HealthFeatureServiceImpl<Mailer>
where
    Mailer: EmailJsApiService,
{
    async fn get_status(&self) -> HealthStatus {
        let cache_guard = self.state.cache.read().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }
        drop(cache_guard);

        let mut cache_guard = self.state.cache.write().await;
        if let Some(cached) = cache_guard
            .as_ref()
            .filter(|c| c.timestamp.elapsed() < self.config.cache_ttl)
        {
            return cached.status;
        }

        let mailer = self
            .mailer
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping mail provider: {err}"))
            .is_ok();

        let status = HealthStatus { mailer };

        cache_guard
            .insert(CachedStatus {
                status,
                timestamp: Instant::now(),
            })
            .status
    }
}

#[cfg(test)]
mod tests {
    use tentertain_extern_contracts::emailjs::MockEmailJsApiService;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let mailer = MockEmailJsApiService::new().with_ping(Ok(()));
        let sut = HealthFeatureServiceImpl::new(
            mailer,
            HealthFeatureConfig {
                cache_ttl: Duration::from_secs(30),
            },
        );

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { mailer: true });
    }

    #[tokio::test]
    async fn mailer_unreachable() {
        // Arrange
        let mailer = MockEmailJsApiService::new().with_ping(Err(anyhow::anyhow!("unreachable")));
        let sut = HealthFeatureServiceImpl::new(
            mailer,
            HealthFeatureConfig {
                cache_ttl: Duration::from_secs(30),
            },
        );

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { mailer: false });
    }

    #[tokio::test]
    async fn cached_within_ttl() {
        // Arrange
        // with_ping sets up exactly one expected call
        let mailer = MockEmailJsApiService::new().with_ping(Ok(()));
        let sut = HealthFeatureServiceImpl::new(
            mailer,
            HealthFeatureConfig {
                cache_ttl: Duration::from_secs(30),
            },
        );

        // Act
        let first = sut.get_status().await;
        let second = sut.get_status().await;

        // Assert
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn refreshed_after_ttl() {
        // Arrange
        let mut mailer = MockEmailJsApiService::new();
        mailer
            .expect_ping()
            .times(2)
            .returning(|| Box::pin(std::future::ready(Ok(()))));
        let sut = HealthFeatureServiceImpl::new(
            mailer,
            HealthFeatureConfig {
                cache_ttl: Duration::ZERO,
            },
        );

        // Act
        sut.get_status().await;
        sut.get_status().await;
    }
}
