//! # Service Registry
//!
//! 애플리케이션 전역 컴포넌트 컨테이너입니다.
//! `main` 에서 인프라(데이터베이스, Redis), 리포지토리, 서비스를 순서대로
//! 생성하여 `Arc<T>` 로 등록하고, 핸들러는 요청 처리 시점에 타입으로 조회합니다.
//!
//! ## 등록 순서
//!
//! ```rust,ignore
//! // 1. 인프라
//! ServiceLocator::set(database.clone());
//! ServiceLocator::set(redis_client.clone());
//!
//! // 2. 서비스 (리포지토리는 생성자로 주입)
//! ServiceLocator::set(Arc::new(CommentService::new(users, publications, comments)));
//!
//! // 3. 핸들러에서 조회
//! let service = ServiceLocator::resolve::<CommentService>()?;
//! ```
//!
//! 컨테이너는 호출자 신원 같은 요청 단위 정보를 담지 않습니다.
//! 인증된 사용자는 항상 서비스 메서드의 인자로 전달됩니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};

/// 타입 기반 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 조회합니다. 없으면 `None`.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회하고, 없으면 `InternalError` 를 반환합니다.
    pub fn resolve<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        Self::try_get::<T>().ok_or_else(|| {
            let name = Self::extract_clean_type_name(std::any::type_name::<T>());
            AppError::InternalError(format!(
                "{} is not registered. Register it with ServiceLocator::set() during start-up",
                name
            ))
        })
    }

    /// 등록 여부를 확인합니다.
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        Self::try_get::<T>().is_some()
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
