//! Page materialization: build page 2..=N of a paginated page.
//!
//! | page_num | permalink (`/page:num/`, dir `/blog/`) | title (`Blog`) |
//! |----------|----------------------------------------|----------------|
//! | 1        | original page URL                      | `Blog`         |
//! | 2        | `/blog/page2/`                         | `Blog - page 2`|
//! | 3        | `/blog/page3/`                         | `Blog - page 3`|

use crate::{
    config::PaginationConfig,
    site::{DefaultPageFactory, Page, PageFactory, PageSeed},
    utils::url,
};

const NUM: &str = ":num";

/// Replace the first `:num` in `template` with `num`.
///
/// Later occurrences stay as written: `/:num/:num/` becomes `/2/:num/`.
pub fn substitute_num(template: &str, num: usize) -> String {
    template.replacen(NUM, &num.to_string(), 1)
}

/// `"posts"` → `"Posts"`, `"HOW-TO"` → `"How-to"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// URL of page `num`, under the original page's directory.
pub fn permalink(original: &Page, config: &PaginationConfig, num: usize) -> String {
    url::join(&original.dir, &substitute_num(&config.permalink, num))
}

/// Title of page `num`: the original title, or the capitalized collection
/// name, followed by the numbered suffix.
pub fn title(original: &Page, config: &PaginationConfig, num: usize) -> String {
    let base = original
        .data
        .title
        .clone()
        .unwrap_or_else(|| capitalize(&config.collection));
    base + &substitute_num(&config.title_suffix, num)
}

/// Seed for page `num`: its own copy of `config` with `page_num` set.
pub fn seed(original: &Page, config: &PaginationConfig, num: usize) -> PageSeed {
    let mut paginate = config.clone();
    paginate.page_num = num;
    paginate.clear_links();

    PageSeed {
        title: title(original, config, num),
        permalink: permalink(original, config, num),
        paginate,
    }
}

/// Build pages `2..=config.pages`.
///
/// The original page's own factory is used when it declares one.
pub fn materialize(original: &Page, config: &PaginationConfig) -> Vec<Page> {
    let factory: &dyn PageFactory = original.factory().unwrap_or(&DefaultPageFactory);

    (2..=config.pages)
        .map(|num| factory.create(original, seed(original, config, num)))
        .collect()
}
