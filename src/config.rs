use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// 应用配置
///
/// 进程启动时从 TOML 文件读取一次，不支持热更新。
#[derive(Debug, Deserialize)]
pub struct Config {
    /// HTTP 监听地址
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// 数据库连接串
    pub database_url: String,
    /// 上传文件存放目录
    pub upload_dir: PathBuf,
    /// 首页每页文章数
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,

    pub site: SiteConfig,
    pub admin: AdminConfig,
    pub session: SessionConfig,
    /// SMTP 配置，缺省时不发送通知邮件
    pub mail: Option<MailConfig>,
}

/// 站点展示信息，由模板渲染
#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
}

/// 管理员身份
///
/// `password_hash` 为 argon2 的 PHC 格式哈希串，不存明文密码。
#[derive(Debug, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    pub password_hash: String,
}

/// 会话签名配置
#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    /// 签名密钥种子，任意长度字符串
    pub secret: String,
    /// 会话有效期（秒）
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: i64,
}

/// 联系表单通知邮件的 SMTP 配置
#[derive(Debug, Deserialize)]
pub struct MailConfig {
    pub smtp_server: String,
    pub username: String,
    pub password: String,
    /// 通知收件地址
    pub notify_to: String,
}

impl Config {
    /// 从指定路径加载配置文件
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_posts_per_page() -> usize {
    5
}

fn default_session_ttl() -> i64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        database_url = "postgres://localhost/minipress"
        upload_dir = "uploads"

        [site]
        name = "My Blog"
        tagline = "notes and letters"

        [admin]
        username = "admin"
        password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$x"

        [session]
        secret = "topsecret"

        [mail]
        smtp_server = "smtp.example.com"
        username = "blog@example.com"
        password = "apppassword"
        notify_to = "owner@example.com"
    "#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(SAMPLE).expect("解析配置失败");

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.posts_per_page, 5);
        assert_eq!(config.site.name, "My Blog");
        assert_eq!(config.site.about, "");
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.session.ttl_secs, 3600);
        assert!(config.mail.is_some());
    }

    #[test]
    fn test_mail_section_is_optional() {
        let toml_content = r#"
            database_url = "postgres://localhost/minipress"
            upload_dir = "uploads"
            posts_per_page = 13

            [site]
            name = "My Blog"

            [admin]
            username = "admin"
            password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$x"

            [session]
            secret = "topsecret"
            ttl_secs = 60
        "#;

        let config: Config = toml::from_str(toml_content).expect("解析配置失败");

        assert!(config.mail.is_none());
        assert_eq!(config.posts_per_page, 13);
        assert_eq!(config.session.ttl_secs, 60);
    }

    #[test]
    fn test_missing_admin_section_should_fail() {
        let toml_content = r#"
            database_url = "postgres://localhost/minipress"
            upload_dir = "uploads"

            [site]
            name = "My Blog"

            [session]
            secret = "topsecret"
        "#;

        assert!(toml::from_str::<Config>(toml_content).is_err());
    }
}
