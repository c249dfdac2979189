//! tola-paginate - collection pagination for tola sites.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use std::{collections::BTreeMap, fs, path::Path};
use tola_paginate::{
    ContentManifest, PaginationSummary, Payload, Site, SiteConfig, directive, log,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Scan { file } => scan(file),
        Commands::Plan => {
            let (site, summary) = load_site(&cli)?;
            plan(&site);
            finish(&summary)
        }
        Commands::Payload { url } => {
            let (site, summary) = load_site(&cli)?;
            payload(&site, url.as_deref())?;
            finish(&summary)
        }
    }
}

/// Load config and manifest, then paginate every requested page.
fn load_site(cli: &Cli) -> Result<(Site, PaginationSummary)> {
    let root = cli.root();
    let config_path = root.join(&cli.config);

    let config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.validate()?;

    let manifest_path = root.join(&cli.manifest);
    let manifest = ContentManifest::from_path(&manifest_path)
        .with_context(|| format!("failed to load `{}`", manifest_path.display()))?;

    let mut site = Site::from_manifest(config, &root, manifest);
    let summary = site.paginate_all();
    Ok((site, summary))
}

/// Show every paginated page with its position and links.
fn plan(site: &Site) {
    for page in site.paginated_pages() {
        let Some(config) = page.pagination() else {
            continue;
        };
        log!(
            "plan";
            "{}/{} {} \"{}\" prev: {} next: {}",
            config.page_num,
            config.pages,
            page.url(),
            page.data.title.as_deref().unwrap_or_default(),
            config.previous_page_path.as_deref().unwrap_or("-"),
            config.next_page_path.as_deref().unwrap_or("-"),
        );
    }
}

/// Print the payloads as one pretty JSON object keyed by page URL.
fn payload(site: &Site, url: Option<&str>) -> Result<()> {
    let payloads = collect_payloads(site, url)?;
    println!("{}", serde_json::to_string_pretty(&payloads)?);
    Ok(())
}

/// Payloads of every paginated page, or of the one page at `url`.
fn collect_payloads<'a>(
    site: &'a Site,
    url: Option<&str>,
) -> Result<BTreeMap<String, Payload<'a>>> {
    let pages: Vec<_> = match url {
        Some(url) => {
            let page = site
                .find_page(url)
                .with_context(|| format!("no page with URL `{url}`"))?;
            vec![page]
        }
        None => site.paginated_pages().collect(),
    };

    let mut payloads = BTreeMap::new();
    for page in pages {
        match site.payload(page)? {
            Some(payload) => {
                payloads.insert(page.url(), payload);
            }
            None => log!("payload"; "{} is not paginated", page.url()),
        }
    }
    Ok(payloads)
}

/// Print the collection a template's paginate loop walks through.
fn scan(file: &Path) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read `{}`", file.display()))?;

    match directive::find_loop(&source) {
        Some(found) => {
            log!("scan"; "{}: `{}` in site.{}", file.display(), found.variable, found.collection);
            println!("{}", found.collection);
            Ok(())
        }
        None => bail!("no paginate loop in `{}`", file.display()),
    }
}

/// Fail the run if any page could not be paginated.
fn finish(summary: &PaginationSummary) -> Result<()> {
    if summary.is_ok() {
        log!("paginate"; "{} page(s) paginated, {} generated", summary.paginated, summary.generated);
        Ok(())
    } else {
        bail!("{} page(s) could not be paginated", summary.failures.len())
    }
}
