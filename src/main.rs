mod args;
mod config;
mod dashboard;
mod demo;
mod detail;
mod error;
mod firestore;
mod fs;
mod listing;
mod post;
mod quotes;
mod renderer;
mod req;
mod site;
mod store;
mod surface;
mod templating;
mod view;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use args::{Args, BuildArgs, Commands, ProjectArgs};
use clap::Parser;
use config::Config;
use error::BlogErr;
use site::Site;
use store::PostStore;
use surface::ListingSurface;
use tera::Tera;
use tracing::info;

/// Everything a command needs from a project directory.
struct Project {
    config: Config,
    tera: Tera,
    store: Arc<dyn PostStore>,
}

impl Project {
    fn open(path: &Path) -> Result<Self, BlogErr> {
        let config = Config::try_from(path.to_path_buf())?;
        let tera = templating::initialize(&path.join(&config.template))?;
        let store = store::from_config(&config)?;
        Ok(Self {
            config,
            tera,
            store,
        })
    }
}

async fn emit(output: &Option<PathBuf>, page: String) -> Result<(), BlogErr> {
    match output {
        Some(path) => {
            info!("write to file: {}", path.display());
            fs::write_file(path, &page).await
        }
        None => {
            println!("{page}");
            Ok(())
        }
    }
}

async fn build(path: &Path) -> Result<(), BlogErr> {
    let project = Project::open(path)?;
    let dist_path = fs::canonicalize_and_ensure_path(&path.join(&project.config.dist_path)).await?;
    let site = Site::new(dist_path);
    renderer::render(&site, &project.tera, &project.config, project.store.clone()).await?;
    site.save().await
}

async fn run(command: Commands) -> Result<(), BlogErr> {
    match command {
        Commands::Build(args) => build(&args.path).await,
        Commands::Blogs(args) => {
            let project = Project::open(&args.project.path)?;
            let surface = ListingSurface::new(project.store.clone(), project.config.listing.clone());
            surface.refresh(args.sort).await;
            let view = surface
                .current()
                .ok_or_else(|| BlogErr::from(format!("no {} listing was published", args.sort)))?;
            let page = renderer::render_listing(&project.tera, &project.config, &view)?;
            emit(&args.project.output, page).await
        }
        Commands::Home(ProjectArgs { path, output }) => {
            let project = Project::open(&path)?;
            let view = view::present_home(project.store.as_ref(), &project.config.listing).await;
            let page =
                renderer::render_home(&project.tera, &project.config, &view, quotes::random_quote())?;
            emit(&output, page).await
        }
        Commands::Show(args) => {
            let project = Project::open(&args.project.path)?;
            let detail =
                detail::present_detail(project.store.as_ref(), &args.id, &project.config.listing)
                    .await;
            let page = renderer::render_detail(&project.tera, &project.config, &detail)?;
            emit(&args.project.output, page).await
        }
        Commands::Dashboard(args) => {
            let project = Project::open(&args.project.path)?;
            let dashboard = dashboard::present_dashboard(project.store.as_ref(), &args.user).await;
            let page = renderer::render_dashboard(&project.tera, &project.config, &dashboard)?;
            emit(&args.project.output, page).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BlogErr> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .compact()
        .init();
    let command = args.command.unwrap_or(Commands::Build(BuildArgs {
        path: PathBuf::from("."),
    }));
    run(command).await
}
