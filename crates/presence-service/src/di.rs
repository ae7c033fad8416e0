//! Dependency injection module using Shaku.
//!
//! `PresenceModule` wires the in-memory document store, the repository and
//! the three services for an embedded, single-process deployment. Hosts with
//! their own store build a module of their own around their `DocumentStore`.

use crate::activity_bridge::ActivityPresenceBridge;
use crate::overview_service::OverviewService;
use crate::presence_service::PresenceService;
use crate::r#impl::{
    ActivityPresenceBridgeImpl, OverviewServiceImpl, OverviewServiceImplParameters, PresenceServiceImpl,
};
use presence_config::{AppConfig, ConfigLoader};
use presence_core::PresenceResult;
use presence_repository::{
    DocumentStore, InMemoryDocumentStore, MonthlyPresenceRepository, MonthlyPresenceRepositoryImpl,
    MonthlyPresenceRepositoryImplParameters,
};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::info;

module! {
    pub PresenceModule {
        components = [
            InMemoryDocumentStore,
            MonthlyPresenceRepositoryImpl,
            PresenceServiceImpl,
            OverviewServiceImpl,
            ActivityPresenceBridgeImpl,
        ],
        providers = [],
    }
}

/// Builds the presence module from configuration.
///
/// Fails with `Configuration` if the settings are unusable.
pub fn build_presence_module(config: &AppConfig) -> PresenceResult<Arc<PresenceModule>> {
    ConfigLoader::validate_config(config)?;

    let module = PresenceModule::builder()
        .with_component_parameters::<MonthlyPresenceRepositoryImpl>(MonthlyPresenceRepositoryImplParameters {
            collection: config.store.collection.clone(),
        })
        .with_component_parameters::<OverviewServiceImpl>(OverviewServiceImplParameters {
            config: config.overview,
        })
        .build();

    info!(
        "Presence module built (collection '{}', {} concurrent overview fetches)",
        config.store.collection, config.overview.max_concurrency
    );
    Ok(Arc::new(module))
}

/// Resolves the engine's services from a module.
pub trait PresenceResolver {
    /// Resolves the single-user presence service.
    fn presence_service(&self) -> Arc<dyn PresenceService>;

    /// Resolves the roster overview service.
    fn overview_service(&self) -> Arc<dyn OverviewService>;

    /// Resolves the activity bridge.
    fn activity_bridge(&self) -> Arc<dyn ActivityPresenceBridge>;

    /// Resolves the repository.
    fn repository(&self) -> Arc<dyn MonthlyPresenceRepository>;

    /// Resolves the underlying document store.
    fn document_store(&self) -> Arc<dyn DocumentStore>;
}

impl PresenceResolver for PresenceModule {
    fn presence_service(&self) -> Arc<dyn PresenceService> {
        self.resolve()
    }

    fn overview_service(&self) -> Arc<dyn OverviewService> {
        self.resolve()
    }

    fn activity_bridge(&self) -> Arc<dyn ActivityPresenceBridge> {
        self.resolve()
    }

    fn repository(&self) -> Arc<dyn MonthlyPresenceRepository> {
        self.resolve()
    }

    fn document_store(&self) -> Arc<dyn DocumentStore> {
        self.resolve()
    }
}
