//! Collection selection: which items a paginated page walks through, in order.

use super::PaginateError;
use crate::{
    config::PaginationConfig,
    site::{ContentStore, Item, POSTS},
};

/// Resolve the working item list for `config`.
///
/// 1. `posts` is newest first, or the language ordering when the store has a
///    localization capability and the page (or the store default) has a
///    language.
///    Any other collection keeps its stored order.
/// 2. `reversed` flips the order.
/// 3. `categories` then `tags` drop items sharing no label with the filter.
pub fn select<'a>(
    store: &'a ContentStore,
    config: &PaginationConfig,
    lang: Option<&str>,
) -> Result<Vec<&'a Item>, PaginateError> {
    let mut items = if config.collection == POSTS {
        store
            .posts_for_language(lang)
            .unwrap_or_else(|| store.posts_newest_first())
    } else {
        store
            .collection(&config.collection)
            .ok_or_else(|| PaginateError::UnknownCollection(config.collection.clone()))?
            .iter()
            .collect()
    };

    if config.reversed {
        items.reverse();
    }

    if let Some(categories) = &config.categories {
        items.retain(|item| item.has_any_category(categories));
    }

    if let Some(tags) = &config.tags {
        items.retain(|item| item.has_any_tag(tags));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DEFAULTS, PaginationOverrides, pagination::resolve},
        site::LanguagePartition,
    };

    fn config(toml_str: &str) -> PaginationConfig {
        let overrides: PaginationOverrides = toml::from_str(toml_str).unwrap();
        resolve(&DEFAULTS, None, &overrides).unwrap()
    }

    fn urls(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.url.clone()).collect()
    }

    fn store() -> ContentStore {
        let mut store = ContentStore::new();
        store.set_posts(vec![
            Item::new("/p1/").with_date("2024-01-01").with_tags(["go"]),
            Item::new("/p2/")
                .with_date("2024-02-01")
                .with_tags(["rust"])
                .with_categories(["dev"]),
            Item::new("/p3/")
                .with_date("2024-03-01")
                .with_tags(["go", "rust"])
                .with_categories(["dev"]),
            Item::new("/p4/").with_date("2024-04-01").with_categories(["life"]),
        ]);
        store.insert_collection(
            "docs",
            vec![Item::new("/d1/"), Item::new("/d2/"), Item::new("/d3/")],
        );
        store
    }

    #[test]
    fn test_posts_newest_first() {
        let store = store();
        let items = select(&store, &config(""), None).unwrap();
        assert_eq!(urls(&items), ["/p4/", "/p3/", "/p2/", "/p1/"]);
    }

    #[test]
    fn test_posts_reversed() {
        let store = store();
        let items = select(&store, &config("reversed = true"), None).unwrap();
        assert_eq!(urls(&items), ["/p1/", "/p2/", "/p3/", "/p4/"]);
    }

    #[test]
    fn test_named_collection_stored_order() {
        let store = store();
        let items = select(&store, &config(r#"collection = "docs""#), None).unwrap();
        assert_eq!(urls(&items), ["/d1/", "/d2/", "/d3/"]);

        let items = select(
            &store,
            &config("collection = \"docs\"\nreversed = true"),
            None,
        )
        .unwrap();
        assert_eq!(urls(&items), ["/d3/", "/d2/", "/d1/"]);
    }

    #[test]
    fn test_unknown_collection() {
        let store = store();
        let err = select(&store, &config(r#"collection = "recipes""#), None).unwrap_err();
        assert!(matches!(err, PaginateError::UnknownCollection(ref name) if name == "recipes"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_tag_filter() {
        let store = store();
        let items = select(&store, &config(r#"tag = "go""#), None).unwrap();
        assert_eq!(urls(&items), ["/p3/", "/p1/"]);
        assert!(items.iter().all(|i| i.tags.contains("go")));
    }

    #[test]
    fn test_category_filter() {
        let store = store();
        let items = select(&store, &config(r#"category = "dev""#), None).unwrap();
        assert_eq!(urls(&items), ["/p3/", "/p2/"]);
    }

    #[test]
    fn test_tag_and_category_intersect() {
        let store = store();
        let items = select(
            &store,
            &config("tag = \"go\"\ncategory = \"dev\""),
            None,
        )
        .unwrap();
        assert_eq!(urls(&items), ["/p3/"]);
    }

    #[test]
    fn test_filter_any_of_several_labels() {
        let store = store();
        let items = select(&store, &config(r#"category = ["dev", "life"]"#), None).unwrap();
        assert_eq!(urls(&items), ["/p4/", "/p3/", "/p2/"]);
    }

    #[test]
    fn test_empty_filter_drops_everything() {
        let store = store();
        let items = select(&store, &config("tags = []"), None).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_language_ordering() {
        let mut store = ContentStore::new();
        store.set_posts(vec![
            Item::new("/en/old/").with_date("2024-01-01").with_lang("en"),
            Item::new("/de/").with_date("2024-02-01").with_lang("de"),
            Item::new("/en/new/").with_date("2024-03-01").with_lang("en"),
        ]);

        // Without the capability the page language is ignored.
        let items = select(&store, &config(""), Some("en")).unwrap();
        assert_eq!(items.len(), 3);

        let store = store.with_localization(LanguagePartition);
        let items = select(&store, &config(""), Some("en")).unwrap();
        assert_eq!(urls(&items), ["/en/new/", "/en/old/"]);

        // No page language: site-wide list.
        let items = select(&store, &config(""), None).unwrap();
        assert_eq!(items.len(), 3);

        // No page language but a site default: that language's posts.
        let mut store = store;
        store.set_default_language(Some("de".into()));
        let items = select(&store, &config(""), None).unwrap();
        assert_eq!(urls(&items), ["/de/"]);
    }
}
