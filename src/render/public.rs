use maud::{Markup, html};

use super::layout;
use crate::config::SiteConfig;
use crate::pagination::PageView;
use crate::storage::Post;

/// 首页：当前页的文章列表加上翻页条
pub fn index_page(site: &SiteConfig, view: &PageView<'_, Post>) -> Markup {
    layout(
        site,
        "Home",
        html! {
            @if view.items().is_empty() {
                p { "Nothing here yet." }
            }
            @for post in view.items() {
                article {
                    h2 { a href={ "/post/" (post.slug) } { (post.title) } }
                    p.meta {
                        (post.subtitle)
                        " — " (post.posted_by)
                        ", " (post.created_at.format("%Y-%m-%d"))
                    }
                }
            }
            div.pager {
                @if let Some(href) = view.prev_href() {
                    a href=(href) { "← Newer" }
                } @else {
                    span.disabled { "← Newer" }
                }
                span.meta { "Page " (view.page()) " of " (view.last_page()) }
                @if let Some(href) = view.next_href() {
                    a href=(href) { "Older →" }
                } @else {
                    span.disabled { "Older →" }
                }
            }
        },
    )
}

pub fn about_page(site: &SiteConfig) -> Markup {
    layout(
        site,
        "About",
        html! {
            h2 { "About" }
            p.content { (site.about) }
        },
    )
}

/// 单篇文章页
pub fn post_page(site: &SiteConfig, post: &Post) -> Markup {
    layout(
        site,
        &post.title,
        html! {
            article {
                h2 { (post.title) }
                p.meta {
                    (post.subtitle)
                    " — " (post.posted_by)
                    ", " (post.created_at.format("%Y-%m-%d %H:%M"))
                }
                @if !post.img_file.is_empty() {
                    img src={ "/static/" (post.img_file) } alt=(post.title);
                }
                div.content { (post.content) }
            }
        },
    )
}

/// 联系表单；`sent` 为真时显示提交成功的提示
pub fn contact_page(site: &SiteConfig, sent: bool) -> Markup {
    layout(
        site,
        "Contact",
        html! {
            h2 { "Contact" }
            @if sent {
                p.notice { "Thanks, your message has been sent." }
            }
            form method="post" action="/contact" {
                label { "Name" input type="text" name="name"; }
                label { "Email" input type="text" name="email"; }
                label { "Phone" input type="text" name="phone_number"; }
                label { "Message" textarea name="message" rows="6" {} }
                button type="submit" { "Send" }
            }
        },
    )
}
