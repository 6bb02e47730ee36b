//! 生成管理员密码的 argon2 哈希串，写进配置的 `admin.password_hash`。
//!
//! 用法：`hashpw <password>`

use std::env;
use std::process::ExitCode;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};

fn main() -> ExitCode {
    let Some(password) = env::args().nth(1) else {
        eprintln!("usage: hashpw <password>");
        return ExitCode::FAILURE;
    };

    let salt = SaltString::generate(&mut OsRng);
    match Argon2::default().hash_password(password.as_bytes(), &salt) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hashing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
