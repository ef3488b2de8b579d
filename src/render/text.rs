//! Plain text rule table.

use crate::tree::NodeKind;

use super::rules::finish_document;
use super::{RuleTable, TagRule};

/// Registry key.
pub const KEY: &str = "txt";

/// Build the plain text rule table. Nothing is escaped.
pub fn rule_table() -> RuleTable {
    let inline = TagRule::new().collapse().left_pad();
    let block = TagRule::new()
        .trim_inside()
        .requires_content()
        .after(|s| format!("{}\n\n", s));
    let list = TagRule::new()
        .collapse()
        .requires_content()
        .after(|s| format!("{}\n", s));

    RuleTable::new(KEY)
        .with_rule(
            NodeKind::Document,
            TagRule::new().requires_content().after(finish_document),
        )
        .with_rule(NodeKind::Plain, inline)
        .with_rule(NodeKind::Bold, inline.trim_inside().requires_content())
        .with_rule(NodeKind::Italic, inline.trim_inside().requires_content())
        .with_rule(
            NodeKind::Link,
            TagRule::new()
                .left_pad()
                .link(|href, s| format!("{} <{}>", s, href)),
        )
        .with_rule(
            NodeKind::Code,
            TagRule::new()
                .no_escape()
                .requires_content()
                .after(|s| format!("{}\n\n", s.trim_end_matches('\n'))),
        )
        .with_rule(NodeKind::Paragraph, block)
        .with_rule(NodeKind::Heading, block)
        .with_rule(
            NodeKind::Image,
            TagRule::new().map_file(|file| format!("[image: {}]", file.filename)),
        )
        .with_rule(NodeKind::UnorderedList, list)
        .with_rule(NodeKind::OrderedList, list)
        .with_rule(
            NodeKind::UnorderedItem,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .repeat(|depth, s| format!("{}- {}", indent(depth), s))
                .after(|s| format!("{}\n", s)),
        )
        .with_rule(
            NodeKind::OrderedItem,
            TagRule::new()
                .trim_inside()
                .requires_content()
                .enumerate(|n, s| format!("{}. {}", n, s))
                .repeat(|depth, s| format!("{}{}", indent(depth), s))
                .after(|s| format!("{}\n", s)),
        )
        .with_rule(
            NodeKind::Table,
            TagRule::new().after(|s| format!("{}\n", s)),
        )
        .with_rule(
            NodeKind::TableRow,
            TagRule::new().after(|s| format!("{}\n", s.trim_end_matches('\t'))),
        )
        .with_rule(
            NodeKind::TableCell,
            TagRule::new().trim_inside().after(|s| format!("{}\t", s)),
        )
}

fn indent(depth: u32) -> String {
    "  ".repeat(depth.saturating_sub(1) as usize)
}
