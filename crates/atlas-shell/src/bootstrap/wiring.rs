//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create the HTTP provider adapter from config / 根据配置创建 HTTP 适配器
//! - Inject it into the app layer through port traits / 通过 Port trait 注入 app 层
//!
//! No business decisions are made here; this is the only place that depends
//! on `atlas-infra` and `atlas-app` at the same time.

use std::sync::Arc;

use atlas_app::{AppDeps, ViewStateController};
use atlas_core::config::AppConfig;
use atlas_core::ports::{CountryListingPort, IndicatorPort};
use atlas_infra::{WorldBankClient, WorldBankSettings};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Data provider initialization failed: {0}")]
    ProviderInit(String),
}

/// Build the port implementations
/// 创建所有 Port 实现
///
/// One client serves both the listing and the indicator port.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let settings = WorldBankSettings::from_config(config);
    tracing::debug!(base_url = %settings.base_url, "Creating World Bank client");

    let client = Arc::new(
        WorldBankClient::new(settings).map_err(|e| WiringError::ProviderInit(e.to_string()))?,
    );

    Ok(AppDeps {
        listing: client.clone() as Arc<dyn CountryListingPort>,
        indicators: client as Arc<dyn IndicatorPort>,
    })
}

/// Wire dependencies and build the view-state controller
/// 组装依赖并构建视图状态控制器
pub fn build_controller(config: &AppConfig) -> WiringResult<ViewStateController> {
    let deps = wire_dependencies(config)?;
    Ok(ViewStateController::from_deps(deps, &config.enrichment))
}
