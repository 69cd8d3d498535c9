use std::cmp::Reverse;

use crate::post::{Post, SortMode};

/// Orders (and for [`SortMode::Featured`] filters) posts for display.
///
/// `Latest` and `Popular` are the same ordering: newest first. There is no
/// popularity metric to sort by. Posts whose date is missing or unparseable
/// go last.
pub fn arrange(posts: &[Post], mode: SortMode) -> Vec<Post> {
    let mut arranged: Vec<Post> = match mode {
        SortMode::Latest | SortMode::Popular => posts.to_vec(),
        SortMode::Featured => posts
            .iter()
            .filter(|post| post.is_featured())
            .cloned()
            .collect(),
    };
    // None < Some(_), so reversing puts undated posts at the end
    arranged.sort_by_cached_key(|post| Reverse(post.published()));
    arranged
}
