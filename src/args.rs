use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;

use crate::post::SortMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        name = "build",
        about = "Render the home page and every listing page into the dist folder. [default]"
    )]
    Build(BuildArgs),
    #[command(name = "blogs", about = "Render the blog listing for one sort mode.")]
    Blogs(BlogsArgs),
    #[command(name = "home", about = "Render the home page.")]
    Home(ProjectArgs),
    #[command(name = "show", about = "Render the detail page of one blog.")]
    Show(ShowArgs),
    #[command(name = "dashboard", about = "Render the dashboard of one user.")]
    Dashboard(DashboardArgs),
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Path to the project directory.
    #[clap(default_value = ".")]
    pub path: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct ProjectArgs {
    /// Path to the project directory.
    #[clap(short, long, default_value = ".")]
    pub path: PathBuf,
    /// Write the page to this file instead of stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct BlogsArgs {
    #[clap(short, long, value_enum, default_value_t = SortMode::Latest)]
    pub sort: SortMode,
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Id of the blog, as in `blog-detail.html?id=...`.
    #[clap(long)]
    pub id: String,
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Id of the user owning the blogs.
    #[clap(short, long)]
    pub user: String,
    #[command(flatten)]
    pub project: ProjectArgs,
}
