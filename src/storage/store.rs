use super::{ContactDraft, DBPool, PostDraft};

/// 管理侧写入接口
///
/// 全部是单语句提交，没有跨语句事务，失败直接向上传播。
pub trait Store: Send + Sync {
    type Error;

    /// 新建文章，返回分配的主键
    fn insert_post(
        &self,
        draft: &PostDraft,
    ) -> impl std::future::Future<Output = Result<i64, Self::Error>>;

    /// 按主键整行更新文章，主键不变
    ///
    /// 返回是否确有此行。
    fn update_post(
        &self,
        id: i64,
        draft: &PostDraft,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>>;

    /// 按主键删除文章，返回是否确有此行
    fn delete_post(&self, id: i64) -> impl std::future::Future<Output = Result<bool, Self::Error>>;

    /// 落库一条联系留言
    fn add_contact(
        &self,
        draft: &ContactDraft,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>>;
}

impl Store for DBPool {
    type Error = sqlx::Error;

    async fn insert_post(&self, draft: &PostDraft) -> Result<i64, Self::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO posts (title, subtitle, slug, content, img_file, posted_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.slug)
        .bind(&draft.content)
        .bind(&draft.img_file)
        .bind(&draft.posted_by)
        .bind(draft.created_at)
        .fetch_one(self)
        .await
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<bool, Self::Error> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2,
                subtitle = $3,
                slug = $4,
                content = $5,
                img_file = $6,
                posted_by = $7,
                created_at = $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.subtitle)
        .bind(&draft.slug)
        .bind(&draft.content)
        .bind(&draft.img_file)
        .bind(&draft.posted_by)
        .bind(draft.created_at)
        .execute(self)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_contact(&self, draft: &ContactDraft) -> Result<(), Self::Error> {
        sqlx::query(
            r#"
            INSERT INTO contacts (name, email, phone_number, message, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone_number)
        .bind(&draft.message)
        .bind(draft.created_at)
        .execute(self)
        .await?;

        Ok(())
    }
}
