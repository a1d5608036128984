//! Reply-tree construction over realistic wire payloads: every comment lands
//! in exactly one position, dangling parents become roots, and input order is
//! preserved at every level.

use std::collections::HashMap;

use nb_core::models::{Comment, CommentNode};
use nb_core::thread::build_thread;

fn parse_comments(raw: &str) -> Vec<Comment> {
    serde_json::from_str(raw).expect("fixture should parse")
}

fn flat_batch() -> Vec<Comment> {
    parse_comments(
        r#"[
        {"id":"c1","announcement_id":"a1","author_name":"Ana","comment":"First!","created_at":"2025-08-20T09:00:00Z"},
        {"id":"c2","announcement_id":"a1","comment":"Reply to first","parent_id":"c1","created_at":"2025-08-20T09:05:00Z"},
        {"id":"c3","announcement_id":"a1","comment":"Deep reply","parent_id":"c2","created_at":"2025-08-20T09:10:00Z"},
        {"id":"c4","announcement_id":"a1","author_name":"Ben","comment":"Another root","created_at":"2025-08-20T09:15:00Z"},
        {"id":"c5","announcement_id":"a1","comment":"Parent was deleted","parent_id":"gone","created_at":"2025-08-20T09:20:00Z"}
    ]"#,
    )
}

fn walk<'a>(nodes: &'a [CommentNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        out.push(node.comment.id.as_str());
        walk(&node.replies, out);
    }
}

#[test]
fn every_comment_appears_exactly_once() {
    let comments = flat_batch();
    let input_ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();

    let forest = build_thread(comments.clone());
    let mut reachable = Vec::new();
    walk(&forest, &mut reachable);

    assert_eq!(reachable.len(), input_ids.len());
    let counts: HashMap<&str, usize> = reachable.iter().fold(HashMap::new(), |mut m, id| {
        *m.entry(*id).or_default() += 1;
        m
    });
    for id in input_ids {
        assert_eq!(counts.get(id), Some(&1), "comment {id} duplicated or dropped");
    }
}

#[test]
fn dangling_parent_is_tolerated_as_root() {
    let forest = build_thread(flat_batch());
    let roots: Vec<&str> = forest.iter().map(|n| n.comment.id.as_str()).collect();
    assert_eq!(roots, vec!["c1", "c4", "c5"]);
}

#[test]
fn root_and_sibling_order_follow_input_order() {
    let comments = parse_comments(
        r#"[
        {"id":"r2","announcement_id":"a1","comment":"second root","created_at":"2025-08-20T09:00:00Z"},
        {"id":"r1","announcement_id":"a1","comment":"first root","created_at":"2025-08-19T09:00:00Z"},
        {"id":"s2","announcement_id":"a1","comment":"later sibling","parent_id":"r2","created_at":"2025-08-20T10:00:00Z"},
        {"id":"s1","announcement_id":"a1","comment":"earlier sibling","parent_id":"r2","created_at":"2025-08-20T09:30:00Z"}
    ]"#,
    );
    // Input order, not timestamp order, is the contract.
    let forest = build_thread(comments);
    let roots: Vec<&str> = forest.iter().map(|n| n.comment.id.as_str()).collect();
    assert_eq!(roots, vec!["r2", "r1"]);
    let siblings: Vec<&str> = forest[0].replies.iter().map(|n| n.comment.id.as_str()).collect();
    assert_eq!(siblings, vec!["s2", "s1"]);
}

#[test]
fn three_deep_chain_is_arrival_order_independent() {
    let in_order = parse_comments(
        r#"[
        {"id":"1","announcement_id":"a1","comment":"root","created_at":"2025-08-20T09:00:00Z"},
        {"id":"2","announcement_id":"a1","comment":"child","parent_id":"1","created_at":"2025-08-20T09:01:00Z"},
        {"id":"3","announcement_id":"a1","comment":"grandchild","parent_id":"2","created_at":"2025-08-20T09:02:00Z"}
    ]"#,
    );
    let shuffled = parse_comments(
        r#"[
        {"id":"1","announcement_id":"a1","comment":"root","created_at":"2025-08-20T09:00:00Z"},
        {"id":"3","announcement_id":"a1","comment":"grandchild","parent_id":"2","created_at":"2025-08-20T09:02:00Z"},
        {"id":"2","announcement_id":"a1","comment":"child","parent_id":"1","created_at":"2025-08-20T09:01:00Z"}
    ]"#,
    );

    for comments in [in_order, shuffled] {
        let forest = build_thread(comments);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].comment.id, "1");
        assert_eq!(forest[0].replies[0].comment.id, "2");
        assert_eq!(forest[0].replies[0].replies[0].comment.id, "3");
    }
}

#[test]
fn rebuilding_from_the_same_list_is_structurally_identical() {
    let comments = flat_batch();
    assert_eq!(build_thread(comments.clone()), build_thread(comments));
}
