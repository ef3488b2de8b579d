//! Markdown rule table.
//!
//! Tables and images have no portable Markdown form that keeps cell
//! structure and dimensions, so both are emitted as inline HTML.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tree::NodeKind;

use super::html::img_tag;
use super::rules::finish_document;
use super::{RuleTable, TagRule};

/// Registry key.
pub const KEY: &str = "md";

/// `#` at the start of a line would open a heading.
static HEADING_LOOKALIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#").expect("valid heading regex"));

/// `12.` at the start of a line would open an ordered list.
static ORDERED_LOOKALIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(\d+)\.").expect("valid ordered list regex"));

/// Build the Markdown rule table.
pub fn rule_table() -> RuleTable {
    let inline = TagRule::new()
        .collapse()
        .left_pad()
        .trim_inside()
        .requires_content();
    let list = TagRule::new()
        .collapse()
        .requires_content()
        .after(|s| format!("{}\n", s));

    RuleTable::new(KEY)
        .with_rule(
            NodeKind::Document,
            TagRule::new().requires_content().after(finish_document),
        )
        .with_rule(
            NodeKind::Plain,
            TagRule::new().collapse().left_pad().escape(escape_markdown),
        )
        .with_rule(
            NodeKind::Bold,
            inline
                .before(|s| format!("**{}", s))
                .after(|s| format!("{}**", s)),
        )
        .with_rule(
            NodeKind::Italic,
            inline
                .before(|s| format!("_{}", s))
                .after(|s| format!("{}_", s)),
        )
        .with_rule(
            NodeKind::Link,
            TagRule::new()
                .left_pad()
                .trim_inside()
                .link(|href, s| format!("[{}]({})", s, href)),
        )
        .with_rule(
            NodeKind::Code,
            TagRule::new()
                .no_escape()
                .requires_content()
                .before(|s| {
                    if s.contains('\n') {
                        format!("```\n{}", s)
                    } else {
                        format!("`{}", s)
                    }
                })
                .after(|s| {
                    if s.contains('\n') {
                        format!("{}\n```\n\n", s.trim_end_matches('\n'))
                    } else {
                        format!("{}`", s)
                    }
                }),
        )
        .with_rule(
            NodeKind::Paragraph,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .after(|s| format!("{}\n\n", s)),
        )
        .with_rule(
            NodeKind::Heading,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .repeat(|level, s| format!("{} {}", "#".repeat(level as usize), s))
                .after(|s| format!("{}\n", s)),
        )
        .with_rule(NodeKind::Image, TagRule::new().map_file(img_tag))
        .with_rule(NodeKind::UnorderedList, list)
        .with_rule(NodeKind::OrderedList, list)
        .with_rule(
            NodeKind::UnorderedItem,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .repeat(|depth, s| format!("{}* {}", indent("  ", depth), s))
                .after(|s| format!("{}\n", s)),
        )
        .with_rule(
            NodeKind::OrderedItem,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .enumerate(|n, s| format!("{}. {}", n, s))
                .repeat(|depth, s| format!("{}{}", indent("   ", depth), s))
                .after(|s| format!("{}\n", s)),
        )
        .with_rule(
            NodeKind::Table,
            TagRule::new()
                .before(|s| format!("<table>{}", s))
                .after(|s| format!("{}</table>\n\n", s)),
        )
        .with_rule(
            NodeKind::TableRow,
            TagRule::new()
                .before(|s| format!("<tr>{}", s))
                .after(|s| format!("{}</tr>", s)),
        )
        .with_rule(
            NodeKind::TableCell,
            TagRule::new()
                .trim_inside()
                .before(|s| format!("<td>{}", s))
                .after(|s| format!("{}</td>", s)),
        )
}

/// Indentation for a 1-based nesting depth.
fn indent(unit: &str, depth: u32) -> String {
    unit.repeat(depth.saturating_sub(1) as usize)
}

/// Escape special Markdown characters.
///
/// Inline markup characters are always escaped; `#` and `N.` only where
/// they would start a block.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' => {
                result.push('\\');
                result.push(c);
            }
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    let result = HEADING_LOOKALIKE.replace_all(&result, r"\#");
    ORDERED_LOOKALIKE
        .replace_all(&result, r"${1}\.")
        .into_owned()
}
