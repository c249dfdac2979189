//! Link stitching: previous/next navigation across a page sequence.

use crate::site::Page;

/// Thread previous/next links through `pages`, ordered by `page_num`.
///
/// Page `k` (0-based) links back to `k` and forward to `k + 2` (1-based
/// numbers). The first page gets no previous link, the last no next link.
/// Pages without a resolved pagination config are skipped but still count
/// as positions in the sequence.
pub fn stitch(pages: &mut [&mut Page]) {
    let urls: Vec<String> = pages.iter().map(|p| p.url()).collect();
    let last = pages.len().saturating_sub(1);

    for (k, page) in pages.iter_mut().enumerate() {
        let Some(config) = page.pagination_mut() else {
            continue;
        };
        config.clear_links();

        if k > 0 {
            config.previous_page = Some(k);
            config.previous_page_path = Some(urls[k - 1].clone());
        }

        if k < last {
            config.next_page = Some(k + 2);
            config.next_page_path = Some(urls[k + 1].clone());
        }
    }
}
