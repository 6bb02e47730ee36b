use maud::{Markup, html};

use super::layout;
use crate::config::SiteConfig;
use crate::storage::Post;

/// 登录页，也是所有未认证的管理请求看到的页面
pub fn login_page(site: &SiteConfig) -> Markup {
    layout(
        site,
        "Sign in",
        html! {
            h2 { "Sign in" }
            form method="post" action="/dashboard" {
                label { "Username" input type="text" name="username"; }
                label { "Password" input type="password" name="password"; }
                button type="submit" { "Sign in" }
            }
        },
    )
}

/// 后台：文章列表、上传表单和注销入口
pub fn dashboard_page(site: &SiteConfig, posts: &[Post]) -> Markup {
    layout(
        site,
        "Dashboard",
        html! {
            h2 { "Dashboard" }
            p {
                a href="/edit/0" { "New post" }
                " · "
                a href="/logout" { "Sign out" }
            }
            table {
                tr { th { "#" } th { "Title" } th { "Slug" } th {} th {} }
                @for post in posts {
                    tr {
                        td { (post.id) }
                        td { (post.title) }
                        td { (post.slug) }
                        td { a href={ "/edit/" (post.id) } { "edit" } }
                        td { a href={ "/delete/" (post.id) } { "delete" } }
                    }
                }
            }
            h3 { "Upload image" }
            form method="post" action="/uploader" enctype="multipart/form-data" {
                input type="file" name="file";
                button type="submit" { "Upload" }
            }
        },
    )
}

/// 编辑页
///
/// `id` 为 0 表示新建，此时 `post` 为 `None`，表单为空。
pub fn edit_page(site: &SiteConfig, id: i64, post: Option<&Post>) -> Markup {
    let field = |name: &str| post.map_or("", |p| match name {
        "title" => p.title.as_str(),
        "subtitle" => p.subtitle.as_str(),
        "slug" => p.slug.as_str(),
        "img_file" => p.img_file.as_str(),
        "posted_by" => p.posted_by.as_str(),
        _ => "",
    });

    layout(
        site,
        if id == 0 { "New post" } else { "Edit post" },
        html! {
            h2 { @if id == 0 { "New post" } @else { "Edit post #" (id) } }
            form method="post" action={ "/edit/" (id) } {
                label { "Title" input type="text" name="title" value=(field("title")); }
                label { "Subtitle" input type="text" name="subtitle" value=(field("subtitle")); }
                label { "Slug" input type="text" name="slug" value=(field("slug")); }
                label { "Image file" input type="text" name="img_file" value=(field("img_file")); }
                label { "Author" input type="text" name="posted_by" value=(field("posted_by")); }
                label {
                    "Content"
                    textarea name="content" rows="14" {
                        @if let Some(p) = post { (p.content) }
                    }
                }
                button type="submit" { "Save" }
            }
        },
    )
}
