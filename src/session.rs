use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use chrono::Utc;
use sha2::{Digest, Sha512};

use crate::config::AdminConfig;

/// 管理会话 Cookie 名
pub const SESSION_COOKIE: &str = "minipress_session";

/// 从配置的密钥种子派生 Cookie 签名密钥
///
/// `Key::from` 要求至少 64 字节的密钥材料，这里用 SHA-512
/// 把任意长度的种子拉伸到固定 64 字节。
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// 校验管理员凭据
///
/// 用户名逐字节比较，密码用 argon2 校验 PHC 哈希串，
/// 比较过程为常数时间，不存在明文密码比对。
pub fn verify_credentials(admin: &AdminConfig, username: &str, password: &str) -> bool {
    if username != admin.username {
        return false;
    }

    let Ok(parsed) = PasswordHash::new(&admin.password_hash) else {
        tracing::error!("admin password_hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// 签发管理会话
///
/// Cookie 值只存过期时刻（Unix 秒），完整性由签名 Jar 保证。
pub fn issue(jar: SignedCookieJar, ttl_secs: i64) -> SignedCookieJar {
    let expires_at = Utc::now().timestamp() + ttl_secs;

    let cookie = Cookie::build((SESSION_COOKIE, expires_at.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    jar.add(cookie)
}

/// 注销会话，无论之前是否已登录
pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
}

/// 当前请求是否持有未过期的管理会话
///
/// 签名不合法的 Cookie 在 Jar 取值时即被丢弃，这里只需再查过期时刻。
pub fn is_authenticated(jar: &SignedCookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .and_then(|c| c.value().parse::<i64>().ok())
        .is_some_and(|expires_at| expires_at > Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use argon2::PasswordHasher;
    use argon2::password_hash::{SaltString, rand_core::OsRng};

    use super::*;

    fn admin_with_password(password: &str) -> AdminConfig {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("生成密码哈希失败");

        AdminConfig {
            username: "admin".to_string(),
            password_hash: hash.to_string(),
        }
    }

    #[test]
    fn test_correct_credentials_verify() {
        let admin = admin_with_password("hunter2");

        assert!(verify_credentials(&admin, "admin", "hunter2"));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let admin = admin_with_password("hunter2");

        assert!(!verify_credentials(&admin, "admin", "hunter3"));
        assert!(!verify_credentials(&admin, "admin", ""));
    }

    #[test]
    fn test_wrong_username_is_rejected() {
        let admin = admin_with_password("hunter2");

        assert!(!verify_credentials(&admin, "root", "hunter2"));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let admin = AdminConfig {
            username: "admin".to_string(),
            password_hash: "not-a-phc-string".to_string(),
        };

        assert!(!verify_credentials(&admin, "admin", "anything"));
    }

    #[test]
    fn test_issued_session_is_authenticated() {
        let key = signing_key("topsecret");
        let jar = issue(SignedCookieJar::new(key.clone()), 3600);

        assert!(is_authenticated(&jar));
    }

    #[test]
    fn test_expired_session_is_anonymous() {
        let key = signing_key("topsecret");
        let jar = issue(SignedCookieJar::new(key.clone()), -1);

        assert!(!is_authenticated(&jar));
    }

    #[test]
    fn test_cleared_session_is_anonymous() {
        let key = signing_key("topsecret");
        let jar = issue(SignedCookieJar::new(key.clone()), 3600);
        let jar = clear(jar);

        assert!(!is_authenticated(&jar));
    }

    #[test]
    fn test_clear_without_prior_session_is_fine() {
        let key = signing_key("topsecret");
        let jar = clear(SignedCookieJar::new(key));

        assert!(!is_authenticated(&jar));
    }

    #[test]
    fn test_signing_key_is_deterministic() {
        assert_eq!(
            signing_key("topsecret").master(),
            signing_key("topsecret").master()
        );
        assert_ne!(
            signing_key("topsecret").master(),
            signing_key("other").master()
        );
    }
}
