mod admin;
mod public;

use axum::Router;
use axum::response::Html;
use maud::Markup;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::state::AppState;

/// 设置应用的路由。
///
/// 公共页面和后台管理路由合并在根路径下，上传目录以静态文件
/// 形式挂在 `/static`，并绑定应用状态。
pub fn setup_route(app: AppState) -> Router {
    let uploads = ServeDir::new(&app.config().upload_dir);

    Router::new()
        .merge(public::setup_route())
        .merge(admin::setup_route())
        .nest_service("/static", uploads)
        .with_state(app)
}

/// 把 maud 模板转成 HTML 响应体
pub(crate) fn page(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

/// 启动 HTTP 服务，并使用给定的路由处理请求。
///
/// 在配置的地址上监听 TCP 连接，并打印启动日志。
#[instrument(name = "http server", skip_all)]
pub async fn run_server_with_router(router: Router, listen_addr: &str) {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind TCP listener on {listen_addr}: {e}"));

    tracing::info!("listening on {listen_addr}");

    axum::serve(listener, router)
        .await
        .expect("Failed to start Axum server");
}

/// 启动 HTTP 服务，自动设置路由和中间件。
///
/// 1. 生成路由
/// 2. 添加日志和追踪中间件
/// 3. 启动服务器
pub async fn run_server(app: AppState) {
    let listen_addr = app.config().listen_addr.clone();
    let router = setup_route(app);
    let router = add_middlewares(router);
    run_server_with_router(router, &listen_addr).await
}

/// 为路由添加中间件，包括请求追踪和失败日志记录。
///
/// 日志记录会在请求失败时输出错误信息。
fn add_middlewares(router: Router) -> Router {
    fn log_failure(
        err: tower_http::classify::ServerErrorsFailureClass,
        _latency: std::time::Duration,
        _span: &tracing::Span,
    ) {
        tracing::error!(error = %err, "request failed");
    }

    router.layer(
        TraceLayer::new_for_http()
            .on_failure(log_failure)
            .on_request(|_req: &_, _span: &tracing::Span| {
                // 空实现，关闭请求日志
            }),
    )
}
