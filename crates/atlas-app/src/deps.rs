//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for controller construction.
//! 控制器构造所需的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern. All fields are required,
//! there are no defaults and no hidden logic.

use std::sync::Arc;

use atlas_core::ports::{CountryListingPort, IndicatorPort};

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
#[derive(Clone)]
pub struct AppDeps {
    // Provider dependencies / 数据源依赖
    pub listing: Arc<dyn CountryListingPort>,
    pub indicators: Arc<dyn IndicatorPort>,
}
