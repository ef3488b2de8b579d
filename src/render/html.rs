//! HTML rule table.

use crate::model::ManifestFile;
use crate::tree::NodeKind;

use super::{RuleTable, TagRule};

/// Registry key.
pub const KEY: &str = "html";

/// Build the HTML rule table.
pub fn rule_table() -> RuleTable {
    let inline = TagRule::new()
        .collapse()
        .left_pad()
        .trim_inside()
        .requires_content();

    RuleTable::new(KEY)
        .with_rule(
            NodeKind::Document,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .after(|s| format!("{}\n", s)),
        )
        .with_rule(
            NodeKind::Plain,
            TagRule::new().collapse().left_pad().escape(escape_html),
        )
        .with_rule(
            NodeKind::Bold,
            inline
                .before(|s| format!("<b>{}", s))
                .after(|s| format!("{}</b>", s)),
        )
        .with_rule(
            NodeKind::Italic,
            inline
                .before(|s| format!("<i>{}", s))
                .after(|s| format!("{}</i>", s)),
        )
        .with_rule(
            NodeKind::Link,
            TagRule::new()
                .left_pad()
                .link(|href, s| format!("<a href=\"{}\">{}</a>", escape_html(href), s)),
        )
        .with_rule(
            NodeKind::Code,
            TagRule::new()
                .requires_content()
                .escape(escape_html)
                .before(|s| {
                    if s.contains('\n') {
                        format!("<pre><code>{}", s)
                    } else {
                        format!("<code>{}", s)
                    }
                })
                .after(|s| {
                    if s.contains('\n') {
                        format!("{}</code></pre>\n", s.trim_end_matches('\n'))
                    } else {
                        format!("{}</code>", s)
                    }
                }),
        )
        .with_rule(
            NodeKind::Paragraph,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .before(|s| format!("<p>{}", s))
                .after(|s| format!("{}</p>\n", s)),
        )
        .with_rule(
            NodeKind::Heading,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .repeat(|level, s| format!("<h{}>{}</h{}>\n", level, s, level)),
        )
        .with_rule(NodeKind::Image, TagRule::new().map_file(img_tag))
        .with_rule(
            NodeKind::UnorderedList,
            TagRule::new()
                .requires_content()
                .before(|s| format!("<ul>\n{}", s))
                .after(|s| format!("{}</ul>\n", s)),
        )
        .with_rule(
            NodeKind::OrderedList,
            TagRule::new()
                .requires_content()
                .before(|s| format!("<ol>\n{}", s))
                .after(|s| format!("{}</ol>\n", s)),
        )
        .with_rule(
            NodeKind::UnorderedItem,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .before(|s| format!("<li>{}", s))
                .after(|s| format!("{}</li>\n", s)),
        )
        .with_rule(
            NodeKind::OrderedItem,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .enumerate(|n, s| format!("<li value=\"{}\">{}</li>\n", n, s)),
        )
        .with_rule(
            NodeKind::Table,
            TagRule::new()
                .before(|s| format!("<table>\n{}", s))
                .after(|s| format!("{}</table>\n", s)),
        )
        .with_rule(
            NodeKind::TableRow,
            TagRule::new()
                .before(|s| format!("<tr>{}", s))
                .after(|s| format!("{}</tr>\n", s)),
        )
        .with_rule(
            NodeKind::TableCell,
            TagRule::new()
                .trim_inside()
                .before(|s| format!("<td>{}", s))
                .after(|s| format!("{}</td>", s)),
        )
}

/// Escape the characters HTML treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// `<img>` tag for a downloaded asset. Shared with the markdown table,
/// which embeds images as inline HTML to keep their dimensions.
pub fn img_tag(file: &ManifestFile) -> String {
    format!(
        "<img src=\"{}\" height={} width={} />",
        escape_html(&file.filename),
        file.height,
        file.width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_img_tag() {
        let file = ManifestFile::new("kix.1.png", 640, 480);
        assert_eq!(
            img_tag(&file),
            "<img src=\"kix.1.png\" height=480 width=640 />"
        );
    }

    #[test]
    fn test_rule_table_is_complete() {
        assert!(rule_table().validate().is_ok());
    }
}
