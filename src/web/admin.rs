use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use axum_extra::extract::SignedCookieJar;
use chrono::Local;
use serde::Deserialize;

use super::page;
use crate::{
    config::Config,
    error::{ApiError, Error, Result},
    render, session,
    state::AppState,
    storage::{DBPool, PostDraft, Querier, Store},
    upload,
};

/// 配置后台管理路由。
///
/// 路由包括：
/// - `GET|POST /dashboard`：登录表单 / 文章管理列表
/// - `GET /logout`：注销
/// - `GET|POST /edit/{id}`：编辑文章，id 为 0 表示新建
/// - `GET|POST /delete/{id}`：删除文章
/// - `POST /uploader`：上传图片
pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard).post(login))
        .route("/logout", get(logout))
        .route("/edit/{id}", get(edit_form).post(edit_submit))
        .route("/delete/{id}", get(delete_post).post(delete_post))
        .route("/uploader", post(uploader))
}

/// 后台首页。未认证时返回登录页。
async fn dashboard(
    jar: SignedCookieJar,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
) -> Result<Html<String>> {
    if !session::is_authenticated(&jar) {
        return Ok(page(render::login_page(&config.site)));
    }

    let posts = pool.list_posts().await?;
    Ok(page(render::dashboard_page(&config.site, &posts)))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

/// 管理员登录。
///
/// 凭据匹配则签发会话并进入后台，否则停留在登录页，
/// 匿名状态不变。
async fn login(
    jar: SignedCookieJar,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
    Form(form): Form<LoginForm>,
) -> Result<(SignedCookieJar, Html<String>)> {
    if !session::verify_credentials(&config.admin, &form.username, &form.password) {
        tracing::info!(username = %form.username, "admin login rejected");
        return Ok((jar, page(render::login_page(&config.site))));
    }

    let jar = session::issue(jar, config.session.ttl_secs);

    let posts = pool.list_posts().await?;
    Ok((jar, page(render::dashboard_page(&config.site, &posts))))
}

/// 注销。不检查之前是否已登录，一律清除会话。
async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (session::clear(jar), Redirect::to("/dashboard"))
}

/// 编辑页。id 为 0 给出空表单，其余 id 不存在时返回 404。
async fn edit_form(
    jar: SignedCookieJar,
    Path(id): Path<i64>,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
) -> Result<Html<String>> {
    if !session::is_authenticated(&jar) {
        return Ok(page(render::login_page(&config.site)));
    }

    if id == 0 {
        return Ok(page(render::edit_page(&config.site, 0, None)));
    }

    let post = pool.get_post(id).await?.ok_or(ApiError::NotFound)?;
    Ok(page(render::edit_page(&config.site, id, Some(&post))))
}

#[derive(Debug, Deserialize)]
pub struct PostForm {
    title: String,
    subtitle: String,
    slug: String,
    content: String,
    #[serde(default)]
    img_file: String,
    posted_by: String,
}

/// 保存文章。
///
/// id 为 0 时插入新行并跳到新分配的编辑页；
/// 其余 id 整行更新（主键不变），更新不存在的行返回 404。
async fn edit_submit(
    jar: SignedCookieJar,
    Path(id): Path<i64>,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
    Form(form): Form<PostForm>,
) -> Result<Response> {
    if !session::is_authenticated(&jar) {
        return Ok(page(render::login_page(&config.site)).into_response());
    }

    let draft = PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        slug: form.slug,
        content: form.content,
        img_file: form.img_file,
        posted_by: form.posted_by,
        created_at: Local::now(),
    };

    if id == 0 {
        let new_id = pool.insert_post(&draft).await?;
        tracing::info!(id = new_id, slug = %draft.slug, "post created");
        return Ok(Redirect::to(&format!("/edit/{new_id}")).into_response());
    }

    if !pool.update_post(id, &draft).await? {
        return Err(ApiError::NotFound.into());
    }
    Ok(Redirect::to(&format!("/edit/{id}")).into_response())
}

/// 删除文章后回到后台首页。
async fn delete_post(
    jar: SignedCookieJar,
    Path(id): Path<i64>,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
) -> Result<Response> {
    if !session::is_authenticated(&jar) {
        return Ok(page(render::login_page(&config.site)).into_response());
    }

    if !pool.delete_post(id).await? {
        return Err(ApiError::NotFound.into());
    }

    tracing::info!(id, "post deleted");
    Ok(Redirect::to("/dashboard").into_response())
}

/// 接收 multipart 表单里名为 `file` 的唯一文件字段，
/// 清洗文件名后写入配置目录，同名覆盖。
async fn uploader(
    jar: SignedCookieJar,
    State(config): State<Arc<Config>>,
    mut multipart: Multipart,
) -> Result<Response> {
    if !session::is_authenticated(&jar) {
        return Ok(page(render::login_page(&config.site)).into_response());
    }

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let raw_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        let name = upload::save_upload(&config.upload_dir, &raw_name, &data).await?;

        tracing::info!(%name, size = data.len(), "image uploaded");
        return Ok(Redirect::to("/dashboard").into_response());
    }

    Err(Error::FormatError("missing multipart field `file`"))
}
