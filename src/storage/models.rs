use chrono::{DateTime, Local};

/// 文章
///
/// `slug` 是对外的查找键，模式上不强制唯一，查找按先到先得。
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    /// 自增主键
    pub id: i64,
    /// 标题
    pub title: String,
    /// 副标题
    pub subtitle: String,
    /// URL 标识
    pub slug: String,
    /// 正文
    pub content: String,
    /// 配图文件名
    pub img_file: String,
    /// 作者署名
    pub posted_by: String,
    /// 发布时间，编辑时一并刷新
    pub created_at: DateTime<Local>,
}

/// 文章编辑表单落库前的内容，不含主键
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub content: String,
    pub img_file: String,
    pub posted_by: String,
    pub created_at: DateTime<Local>,
}

/// 联系表单留言
///
/// 只写不读：应用从不展示或修改已落库的留言。
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
    pub created_at: DateTime<Local>,
}
