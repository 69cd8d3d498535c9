use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::{
    config::Config,
    dashboard::DashboardPage,
    detail::DetailPage,
    error::{BlogErr, ContextExt},
    post::SortMode,
    quotes::{Quote, random_quote},
    site::Site,
    store::PostStore,
    view::{ListingView, present, present_home},
};

#[derive(Serialize)]
struct SortLink {
    mode: SortMode,
    label: &'static str,
    page: &'static str,
    active: bool,
}

fn base_context(config: &Config) -> Context {
    let mut context = Context::new();
    context.insert("config", config);
    context
}

fn render_template(tera: &Tera, template: &str, context: &Context) -> Result<String, BlogErr> {
    debug!("rendering {template}");
    tera.render(template, context)
        .with_context(|| format!("render template: {template}"))
}

pub fn render_listing(tera: &Tera, config: &Config, view: &ListingView) -> Result<String, BlogErr> {
    let sorts: Vec<SortLink> = SortMode::ALL
        .iter()
        .map(|mode| SortLink {
            mode: *mode,
            label: mode.label(),
            page: mode.page(),
            active: *mode == view.sort,
        })
        .collect();
    let mut context = base_context(config);
    context.insert("view", view);
    context.insert("demo", &view.is_demo());
    context.insert("sort_label", view.sort.label());
    context.insert("sorts", &sorts);
    render_template(tera, "blogs.html", &context)
}

pub fn render_home(
    tera: &Tera,
    config: &Config,
    view: &ListingView,
    quote: Quote,
) -> Result<String, BlogErr> {
    let mut context = base_context(config);
    context.insert("view", view);
    context.insert("demo", &view.is_demo());
    context.insert("quote", &quote);
    render_template(tera, "index.html", &context)
}

pub fn render_detail(tera: &Tera, config: &Config, page: &DetailPage) -> Result<String, BlogErr> {
    let mut context = base_context(config);
    context.insert("page", page);
    render_template(tera, "blog-detail.html", &context)
}

pub fn render_dashboard(
    tera: &Tera,
    config: &Config,
    page: &DashboardPage,
) -> Result<String, BlogErr> {
    let mut context = base_context(config);
    context.insert("page", page);
    render_template(tera, "dashboard.html", &context)
}

/// Renders the home page and one listing page per sort mode into `site`.
/// The three listings are fetched concurrently.
pub async fn render(
    site: &Site,
    tera: &Tera,
    config: &Config,
    store: Arc<dyn PostStore>,
) -> Result<(), BlogErr> {
    info!("render home and listing pages");
    let home = present_home(store.as_ref(), &config.listing).await;
    site.add_page(
        "index.html",
        render_home(tera, config, &home, random_quote())?.into(),
    );

    let mut listings = JoinSet::new();
    for sort in SortMode::ALL {
        let store = store.clone();
        let options = config.listing.clone();
        listings.spawn(async move { present(store.as_ref(), sort, &options).await });
    }
    while let Some(view) = listings.join_next().await {
        let view = view?;
        site.add_page(view.sort.page(), render_listing(tera, config, &view)?.into());
    }
    info!("render home and listing pages complete");
    Ok(())
}
