//! # Configuration DTO / 配置数据结构
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No I/O / 禁止读写文件**
//!
//! Keys missing from the TOML document take the built-in value from
//! [`AppConfig::with_defaults`]. Values that are present are accepted as-is.

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";
pub const DEFAULT_POPULATION_INDICATOR: &str = "SP.POP.TOTL";
pub const DEFAULT_GDP_INDICATOR: &str = "NY.GDP.MKTP.CD";

/// Data provider endpoint settings
/// 数据源接口配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// `per_page` sent with the listing request; must cover every country in one page
    pub listing_page_size: u32,

    /// Whole-request timeout applied by the HTTP client
    pub request_timeout_secs: u64,
}

/// Enrichment settings
/// 数据补全配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentConfig {
    /// Year of the indicator data point (`date` query parameter)
    pub indicator_year: u16,

    pub population_indicator: String,

    pub gdp_indicator: String,

    /// Upper bound for a single indicator lookup; a slower lookup counts as absent
    pub lookup_timeout_secs: u64,

    /// Maximum number of countries enriched at once (0 = unbounded)
    pub max_concurrent_fetches: usize,
}

/// Application configuration DTO
/// 应用配置 DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub enrichment: EnrichmentConfig,
}

impl AppConfig {
    /// Built-in configuration, used when no config file exists
    /// 内置默认配置（无配置文件时使用）
    pub fn with_defaults() -> Self {
        Self {
            provider: ProviderConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                listing_page_size: 400,
                request_timeout_secs: 20,
            },
            enrichment: EnrichmentConfig {
                indicator_year: 2022,
                population_indicator: DEFAULT_POPULATION_INDICATOR.to_string(),
                gdp_indicator: DEFAULT_GDP_INDICATOR.to_string(),
                lookup_timeout_secs: 10,
                max_concurrent_fetches: 0,
            },
        }
    }

    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let defaults = Self::with_defaults();
        let provider = toml_value.get("provider");
        let enrichment = toml_value.get("enrichment");

        let str_or = |table: Option<&toml::Value>, key: &str, default: String| {
            table
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(default)
        };
        let int_or = |table: Option<&toml::Value>, key: &str, default: i64| {
            table
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(default)
        };

        Self {
            provider: ProviderConfig {
                base_url: str_or(provider, "base_url", defaults.provider.base_url),
                listing_page_size: int_or(
                    provider,
                    "listing_page_size",
                    i64::from(defaults.provider.listing_page_size),
                ) as u32,
                request_timeout_secs: int_or(
                    provider,
                    "request_timeout_secs",
                    defaults.provider.request_timeout_secs as i64,
                ) as u64,
            },
            enrichment: EnrichmentConfig {
                indicator_year: int_or(
                    enrichment,
                    "indicator_year",
                    i64::from(defaults.enrichment.indicator_year),
                ) as u16,
                population_indicator: str_or(
                    enrichment,
                    "population_indicator",
                    defaults.enrichment.population_indicator,
                ),
                gdp_indicator: str_or(enrichment, "gdp_indicator", defaults.enrichment.gdp_indicator),
                lookup_timeout_secs: int_or(
                    enrichment,
                    "lookup_timeout_secs",
                    defaults.enrichment.lookup_timeout_secs as i64,
                ) as u64,
                max_concurrent_fetches: int_or(
                    enrichment,
                    "max_concurrent_fetches",
                    defaults.enrichment.max_concurrent_fetches as i64,
                ) as usize,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
