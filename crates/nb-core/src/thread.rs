//! # Reply Tree Builder
//!
//! Turns the flat, parent-referencing comment list into an ordered forest.
//! The store delivers comments flat; nesting exists only client-side and is
//! rebuilt from scratch on every fetch.

use std::collections::HashMap;

use crate::models::{Comment, CommentNode};

/// Builds the reply forest from a flat comment list.
///
/// Two passes keyed by id, so a comment whose parent arrives later in the
/// list still attaches correctly. A comment with no parent id, a parent id
/// missing from this batch (deleted or paginated out), or a parent id equal
/// to its own id becomes a root. Sibling order and root order preserve input
/// order.
///
/// Precondition: the input parent graph is acyclic (unique, non-empty ids).
/// Construction itself is a forward pass and cannot loop, but the emitted
/// structure is only guaranteed to be a forest under that precondition.
pub fn build_thread(comments: Vec<Comment>) -> Vec<CommentNode> {
    let position: HashMap<&str, usize> = comments
        .iter()
        .enumerate()
        .map(|(idx, c)| (c.id.as_str(), idx))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (idx, comment) in comments.iter().enumerate() {
        let parent = comment
            .parent_id
            .as_deref()
            .and_then(|pid| position.get(pid).copied());
        match parent {
            Some(p) if p != idx => children[p].push(idx),
            _ => roots.push(idx),
        }
    }

    roots
        .into_iter()
        .map(|root| assemble(root, &comments, &children))
        .collect()
}

fn assemble(idx: usize, comments: &[Comment], children: &[Vec<usize>]) -> CommentNode {
    CommentNode {
        comment: comments[idx].clone(),
        replies: children[idx]
            .iter()
            .map(|&child| assemble(child, comments, children))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comment(id: &str, parent: Option<&str>) -> Comment {
        Comment {
            id: id.into(),
            announcement_id: "a1".into(),
            author_id: None,
            author_name: None,
            body: format!("comment {id}"),
            parent_id: parent.map(Into::into),
            created_at: Utc::now(),
        }
    }

    fn ids(forest: &[CommentNode]) -> Vec<&str> {
        forest.iter().map(|n| n.comment.id.as_str()).collect()
    }

    #[test]
    fn test_three_deep_chain() {
        let forest = build_thread(vec![
            comment("1", None),
            comment("2", Some("1")),
            comment("3", Some("2")),
        ]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].comment.id, "1");
        assert_eq!(forest[0].replies[0].comment.id, "2");
        assert_eq!(forest[0].replies[0].replies[0].comment.id, "3");
    }

    #[test]
    fn test_chain_attaches_regardless_of_arrival_order() {
        // "3" arrives before its parent "2"; the two-pass build must still nest it.
        let forest = build_thread(vec![
            comment("1", None),
            comment("3", Some("2")),
            comment("2", Some("1")),
        ]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].replies[0].comment.id, "2");
        assert_eq!(forest[0].replies[0].replies[0].comment.id, "3");
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let forest = build_thread(vec![
            comment("1", None),
            comment("2", Some("deleted")),
        ]);
        assert_eq!(ids(&forest), vec!["1", "2"]);
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let forest = build_thread(vec![comment("1", Some("1"))]);
        assert_eq!(ids(&forest), vec!["1"]);
        assert!(forest[0].replies.is_empty());
    }

    #[test]
    fn test_sibling_and_root_order_is_stable() {
        let forest = build_thread(vec![
            comment("b", None),
            comment("a", None),
            comment("b2", Some("b")),
            comment("b1", Some("b")),
        ]);
        assert_eq!(ids(&forest), vec!["b", "a"]);
        assert_eq!(
            forest[0]
                .replies
                .iter()
                .map(|n| n.comment.id.as_str())
                .collect::<Vec<_>>(),
            vec!["b2", "b1"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_forest() {
        assert!(build_thread(Vec::new()).is_empty());
    }
}
