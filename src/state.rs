use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{config::Config, mail::Mailer, session, storage::DBPool};

/// 应用程序上下文
///
/// [`AppState`] 封装了数据库连接池、配置、邮件发送器和会话签名密钥，
/// 提供统一访问入口。各字段通过 `FromRef` 派生单独注入处理函数。
#[derive(Clone, FromRef)]
pub struct AppState {
    pool: DBPool,
    config: Arc<Config>,
    mailer: Option<Mailer>,
    signing_key: Key,
}

impl AppState {
    /// 创建一个新的 [`AppState`] 实例
    ///
    /// 签名密钥由配置里的会话密钥种子派生。
    pub fn new(pool: DBPool, config: Config, mailer: Option<Mailer>) -> Self {
        let signing_key = session::signing_key(&config.session.secret);

        Self {
            pool,
            config: Arc::new(config),
            mailer,
            signing_key,
        }
    }

    /// 获取数据库连接池
    pub fn pool(&self) -> &DBPool {
        &self.pool
    }

    /// 获取配置
    pub fn config(&self) -> &Config {
        &self.config
    }
}
