use maud::{html, Markup, PreEscaped, DOCTYPE};
use pages::AssetError;
use pulldown_cmark::{html::push_html, Options, Parser};
use shared::domain::{AppConfig, ContentBlock, PageId};

const STYLE: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", sans-serif; color: #31333f; display: flex; min-height: 100vh; }
.sidebar { width: 17rem; background: #f0f2f6; padding: 2rem 1.25rem; box-sizing: border-box; flex-shrink: 0; }
.sidebar fieldset { border: 0; padding: 0; margin: 0; }
.sidebar legend { font-size: 0.9rem; margin-bottom: 0.5rem; }
.sidebar label { display: block; padding: 0.2rem 0; cursor: pointer; }
main { flex: 1; padding: 3rem 4rem; box-sizing: border-box; min-width: 0; }
.layout-centered main > .content { max-width: 46rem; margin: 0 auto; }
figure { margin: 1rem 0; }
figure img { width: 100%; height: auto; }
figcaption { color: #808495; font-size: 0.85rem; text-align: center; }
hr { border: 0; border-top: 1px solid #e6e9ef; margin: 2rem 0; }
.badge { display: inline-block; border-radius: 0.5rem; padding: 0.1rem 0.5rem; margin: 0.25rem 0; }
.badge p { margin: 0; }
.badge-green { background: #dff5e3; color: #177233; }
.badge-blue { background: #e0ecfb; color: #1c5393; }
.badge-orange { background: #fdebd8; color: #9a4a07; }
.badge-red { background: #fde0e0; color: #a3201e; }
.badge-gray { background: #ececec; color: #4a4a4a; }
pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; border-radius: 0.4rem; }
iframe { width: 100%; border: 0; }
.asset-error { background: #ffecec; color: #7d1b1b; border-radius: 0.4rem; padding: 1rem; }
"#;

/// What goes in the main panel for one request.
#[derive(Debug)]
pub enum PageBody<'a> {
    Blocks(&'a [ContentBlock]),
    Empty,
    Failed(&'a AssetError),
}

pub fn render_document(
    config: &AppConfig,
    pages: impl IntoIterator<Item = PageId>,
    selected: Option<PageId>,
    body: PageBody<'_>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.page_title) }
                link rel="icon" href=(favicon_href(&config.page_icon));
                style { (PreEscaped(STYLE)) }
            }
            body class={ "layout-" (config.layout.as_str()) } {
                (sidebar(config, pages, selected))
                main {
                    div class="content" {
                        (page_body(body))
                    }
                }
            }
        }
    }
}

fn sidebar(
    config: &AppConfig,
    pages: impl IntoIterator<Item = PageId>,
    selected: Option<PageId>,
) -> Markup {
    html! {
        aside class="sidebar" {
            form method="get" action="/" {
                fieldset {
                    legend { (config.menu_label) }
                    @for page in pages {
                        label {
                            input type="radio" name="page" value=(page.label())
                                checked[selected == Some(page)]
                                onchange="this.form.submit()";
                            " " (page.label())
                        }
                    }
                }
                noscript {
                    button type="submit" { "Show" }
                }
            }
        }
    }
}

fn page_body(body: PageBody<'_>) -> Markup {
    match body {
        PageBody::Blocks(blocks) => html! {
            @for block in blocks {
                (content_block(block))
            }
        },
        PageBody::Empty => html! {},
        PageBody::Failed(error) => html! {
            div class="asset-error" role="alert" {
                strong { "This page could not be rendered." }
                p { (error.to_string()) }
            }
        },
    }
}

pub fn content_block(block: &ContentBlock) -> Markup {
    match block {
        ContentBlock::Title { text } => html! { h1 { (text) } },
        ContentBlock::Subheader { text } => html! { h3 { (text) } },
        ContentBlock::Text { markdown } => html! { div class="text" { (render_markdown(markdown)) } },
        ContentBlock::Divider => html! { hr; },
        ContentBlock::Image { path, caption } => html! {
            figure {
                img src=(asset_url(path)) alt=(caption.as_deref().unwrap_or(""));
                @if let Some(caption) = caption {
                    figcaption { (caption) }
                }
            }
        },
        ContentBlock::Badge { text, color } => html! {
            div class={ "badge badge-" (color.as_str()) } { (render_markdown(text)) }
        },
        ContentBlock::EmbeddedHtml {
            content,
            height,
            scrollable,
        } => html! {
            iframe srcdoc=(content) height=(height)
                scrolling=(if *scrollable { "yes" } else { "no" }) {}
        },
        ContentBlock::CodeBlock { text, language } => html! {
            pre { code class={ "language-" (language) } { (text) } }
        },
    }
}

/// Converts page markdown to HTML. Page text is trusted static content.
pub fn render_markdown(source: &str) -> PreEscaped<String> {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    push_html(&mut out, parser);
    PreEscaped(out)
}

pub fn asset_url(path: &str) -> String {
    format!("/assets/{}", path.trim_start_matches("./"))
}

fn favicon_href(icon: &str) -> String {
    format!(
        "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>\
         <text y='.9em' font-size='90'>{icon}</text></svg>"
    )
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
