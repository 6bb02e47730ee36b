mod admin;
mod public;

pub use self::{
    admin::{dashboard_page, edit_page, login_page},
    public::{about_page, contact_page, index_page, post_page},
};

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::SiteConfig;

const STYLE: &str = r#"
body { max-width: 46rem; margin: 0 auto; padding: 0 1rem; font-family: Georgia, serif; color: #222; }
header { padding: 1.5rem 0; border-bottom: 1px solid #ddd; }
header h1 { margin: 0; font-size: 1.6rem; }
header p.tagline { margin: .2rem 0 0; color: #777; }
nav a { margin-right: 1rem; color: #444; }
article { margin: 1.5rem 0; }
article h2 { margin-bottom: .2rem; }
.meta { color: #888; font-size: .85rem; }
.content { white-space: pre-wrap; }
.pager { display: flex; justify-content: space-between; margin: 2rem 0; }
.pager .disabled { color: #bbb; }
form label { display: block; margin-top: .8rem; }
form input[type=text], form input[type=password], form textarea { width: 100%; padding: .4rem; }
form button { margin-top: 1rem; padding: .4rem 1.2rem; }
table { width: 100%; border-collapse: collapse; }
td, th { text-align: left; padding: .4rem; border-bottom: 1px solid #eee; }
.notice { background: #eef6ee; border: 1px solid #cde3cd; padding: .6rem 1rem; margin: 1rem 0; }
"#;

/// 页面骨架：站头、导航和正文
pub(crate) fn layout(site: &SiteConfig, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " · " (site.name) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { a href="/" { (site.name) } }
                    @if !site.tagline.is_empty() {
                        p.tagline { (site.tagline) }
                    }
                    nav {
                        a href="/" { "Home" }
                        a href="/about" { "About" }
                        a href="/contact" { "Contact" }
                        a href="/dashboard" { "Dashboard" }
                    }
                }
                main { (body) }
            }
        }
    }
}
