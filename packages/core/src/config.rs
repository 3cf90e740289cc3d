//! Централизованная конфигурация пайплайна
//!
//! Здесь только runtime-настройки. Бинарные размеры ключей, шифротекстов и подписей
//! являются константами схем (см. [`crate::crypto::provider`]) и не настраиваются.

use crate::crypto::aead::AeadAlgorithm;
use crate::error::{CryptoError, Result};
use std::sync::OnceLock;

/// Глобальная конфигурация (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

const ENV_AEAD: &str = "QKD_PQC_AEAD";
const ENV_PREVIEW_BYTES: &str = "QKD_PQC_PREVIEW_BYTES";
const ENV_DEMO_MESSAGE: &str = "QKD_PQC_DEMO_MESSAGE";

/// Основная структура конфигурации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// AEAD для транспортного конверта
    pub aead_algorithm: AeadAlgorithm,

    /// Сколько первых байт публичного материала показывать в логах и отчётах
    pub preview_bytes: usize,

    /// Сообщение по умолчанию для демонстрационного прогона
    pub demo_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aead_algorithm: AeadAlgorithm::Aes256Gcm,
            preview_bytes: 32,
            demo_message:
                "This message is secured using quantum-derived keys and post-quantum cryptography!"
                    .to_string(),
        }
    }
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    ///
    /// Нераспознанные значения игнорируются, остаётся значение по умолчанию.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Строгий вариант [`Config::from_env`]: нераспознанное значение является ошибкой
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_AEAD) {
            if let Ok(parsed) = val.parse() {
                config.aead_algorithm = parsed;
            }
        }

        if let Some(val) = lookup(ENV_PREVIEW_BYTES) {
            if let Ok(parsed) = val.parse() {
                config.preview_bytes = parsed;
            }
        }

        if let Some(val) = lookup(ENV_DEMO_MESSAGE) {
            config.demo_message = val;
        }

        config
    }

    fn try_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup(ENV_AEAD) {
            config.aead_algorithm = val.parse()?;
        }

        if let Some(val) = lookup(ENV_PREVIEW_BYTES) {
            config.preview_bytes = val.parse().map_err(|e| {
                CryptoError::InvalidConfigError(format!("{}={:?}: {}", ENV_PREVIEW_BYTES, val, e))
            })?;
        }

        if let Some(val) = lookup(ENV_DEMO_MESSAGE) {
            config.demo_message = val;
        }

        Ok(config)
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Автоматически инициализирует конфигурацию со значениями по умолчанию при первом вызове
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// Инициализировать глобальную конфигурацию со значениями по умолчанию
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init() -> std::result::Result<(), &'static str> {
        Self::init_with(Self::default())
    }

    /// Инициализировать глобальную конфигурацию из переменных окружения
    pub fn init_from_env() -> std::result::Result<(), &'static str> {
        Self::init_with(Self::from_env())
    }

    /// Инициализировать глобальную конфигурацию с кастомным экземпляром
    pub fn init_with(config: Config) -> std::result::Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| "Config already initialized")
    }

    /// Проверить, инициализирована ли глобальная конфигурация
    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}
