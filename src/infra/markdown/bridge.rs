use anyhow::{Context, Result};
use htmd::options::{BulletListMarker, CodeBlockStyle, HeadingStyle, Options};
use htmd::{Element, HtmlToMarkdown};
use pulldown_cmark::{html, Options as MarkdownOptions, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletMarker {
    #[default]
    Dash,
    Asterisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BridgeOptions {
    pub bullet_marker: BulletMarker,
}

/// Converts stored HTML into editor Markdown and back. `<span>` and `<br>`
/// survive the HTML → Markdown direction verbatim so inline colouring and
/// hard breaks written in the old editor are not lost.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBridge {
    options: BridgeOptions,
}

impl MarkdownBridge {
    pub fn new(options: BridgeOptions) -> Self {
        Self { options }
    }

    fn converter(&self) -> HtmlToMarkdown {
        let bullet_list_marker = match self.options.bullet_marker {
            BulletMarker::Dash => BulletListMarker::Dash,
            BulletMarker::Asterisk => BulletListMarker::Asterisk,
        };
        HtmlToMarkdown::builder()
            .options(Options {
                heading_style: HeadingStyle::Atx,
                code_block_style: CodeBlockStyle::Fenced,
                bullet_list_marker,
                ..Default::default()
            })
            .skip_tags(vec!["script", "style"])
            .add_handler(vec!["span"], |element: Element| {
                Some(format!(
                    "<span{}>{}</span>",
                    render_attrs(&element),
                    element.content
                ))
            })
            .add_handler(vec!["br"], |_: Element| Some("<br>".to_string()))
            .build()
    }

    pub fn html_to_markdown(&self, html: &str) -> Result<String> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }
        self.converter()
            .convert(html)
            .context("failed to convert html to markdown")
    }

    pub fn markdown_to_html(&self, markdown: &str) -> String {
        let mut options = MarkdownOptions::empty();
        options.insert(MarkdownOptions::ENABLE_TABLES);
        options.insert(MarkdownOptions::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(markdown, options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

fn render_attrs(element: &Element) -> String {
    element
        .attrs
        .iter()
        .map(|attr| {
            let name: &str = &attr.name.local;
            let value: &str = &attr.value;
            format!(" {name}=\"{}\"", value.replace('"', "&quot;"))
        })
        .collect()
}
