use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use axum_extra::extract::Query;
use chrono::Local;
use serde::Deserialize;

use super::page;
use crate::{
    config::Config,
    error::{ApiError, Result},
    mail::Mailer,
    pagination, render,
    state::AppState,
    storage::{ContactDraft, DBPool, Querier, Store},
};

/// 配置公共页面路由。
///
/// 路由包括：
/// - `GET /`：分页文章列表
/// - `GET /about`：关于页
/// - `GET /post/{slug}`：单篇文章
/// - `GET|POST /contact`：联系表单
pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/post/{slug}", get(post_view))
        .route("/contact", get(contact_form).post(contact_submit))
}

/// 首页查询参数
///
/// `page` 保持字符串原样接收，缺失或非数字在分页逻辑里按第 1 页处理。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HomeQuery {
    page: Option<String>,
}

/// 首页：按主键升序取全部文章后切出当前页窗口。
async fn home(
    Query(params): Query<HomeQuery>,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
) -> Result<Html<String>> {
    let posts = pool.list_posts().await?;
    let view = pagination::paginate(&posts, params.page.as_deref(), config.posts_per_page);

    Ok(page(render::index_page(&config.site, &view)))
}

async fn about(State(config): State<Arc<Config>>) -> Html<String> {
    page(render::about_page(&config.site))
}

/// 根据 slug 获取单篇文章。
///
/// slug 重复时返回主键最小的一篇；没有匹配返回 404。
async fn post_view(
    Path(slug): Path<String>,
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
) -> Result<Html<String>> {
    let post = pool.find_by_slug(&slug).await?.ok_or(ApiError::NotFound)?;

    Ok(page(render::post_page(&config.site, &post)))
}

async fn contact_form(State(config): State<Arc<Config>>) -> Html<String> {
    page(render::contact_page(&config.site, false))
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    name: String,
    email: String,
    phone_number: String,
    message: String,
}

/// 提交联系表单。
///
/// 留言先落库，通知邮件放到后台任务发送，邮件失败不影响本次请求。
/// 字段内容不做校验。
async fn contact_submit(
    State(pool): State<DBPool>,
    State(config): State<Arc<Config>>,
    State(mailer): State<Option<Mailer>>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>> {
    let draft = ContactDraft {
        name: form.name,
        email: form.email,
        phone_number: form.phone_number,
        message: form.message,
        created_at: Local::now(),
    };

    pool.add_contact(&draft).await?;

    match mailer {
        Some(mailer) => mailer.spawn_notify(draft),
        None => tracing::debug!("mail not configured, skip contact notification"),
    }

    Ok(page(render::contact_page(&config.site, true)))
}
