use super::{DBPool, Post};

/// 公共侧只读查询接口
pub trait Querier: Send + Sync {
    type Error;

    /// 按主键升序返回全部文章
    ///
    /// 首页分页在内存里对这份列表切窗口，文章量很小。
    fn list_posts(&self) -> impl std::future::Future<Output = Result<Vec<Post>, Self::Error>>;

    /// 按主键查询单篇文章
    fn get_post(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Post>, Self::Error>>;

    /// 按 slug 查询单篇文章
    ///
    /// slug 不保证唯一，返回主键最小的那条（先到先得），
    /// 没有匹配时返回 `None`。
    fn find_by_slug(
        &self,
        slug: impl AsRef<str>,
    ) -> impl std::future::Future<Output = Result<Option<Post>, Self::Error>>;
}

impl Querier for DBPool {
    type Error = sqlx::Error;

    async fn list_posts(&self) -> Result<Vec<Post>, Self::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, subtitle, slug, content, img_file, posted_by, created_at
            FROM posts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self)
        .await
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, Self::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, subtitle, slug, content, img_file, posted_by, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self)
        .await
    }

    async fn find_by_slug(&self, slug: impl AsRef<str>) -> Result<Option<Post>, Self::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, subtitle, slug, content, img_file, posted_by, created_at
            FROM posts
            WHERE slug = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(slug.as_ref())
        .fetch_optional(self)
        .await
    }
}
