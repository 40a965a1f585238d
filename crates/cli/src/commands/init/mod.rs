use clap::Args;
use common::config::project::{CONFIG_FILE_NAME, DEFAULT_DESTINATION, DEFAULT_SOURCE};
use common::error::SqlMetaError;
use log::info;
use minijinja::{context, Environment};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TEMPLATE: &str = include_str!("templates/sqlmeta.yml.j2");

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to write sqlmeta.yml into
    #[arg(long, short = 'p', default_value = ".")]
    pub path: PathBuf,

    /// SQL file recorded as the conversion source
    #[arg(long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// YAML file recorded as the conversion destination
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    /// Replace an existing sqlmeta.yml
    #[arg(long)]
    pub force: bool,
}

/// Write a `sqlmeta.yml` with the given source and destination.
pub fn handle_init(args: &InitArgs) -> Result<PathBuf, SqlMetaError> {
    let target = args.path.join(CONFIG_FILE_NAME);
    if target.exists() && !args.force {
        return Err(SqlMetaError::config_msg(format!(
            "{} already exists, pass --force to replace it",
            target.display()
        )));
    }

    let rendered = render_config(&args.source, &args.destination)?;
    create_parent(&args.path)?;
    fs::write(&target, rendered).map_err(SqlMetaError::config)?;

    info!("created {}", target.display());
    Ok(target)
}

fn render_config(source: &str, destination: &str) -> Result<String, SqlMetaError> {
    let mut env = Environment::new();
    env.add_template(CONFIG_FILE_NAME, CONFIG_TEMPLATE)
        .map_err(SqlMetaError::config)?;
    let template = env
        .get_template(CONFIG_FILE_NAME)
        .map_err(SqlMetaError::config)?;
    let mut rendered = template
        .render(context! { source => source, destination => destination })
        .map_err(SqlMetaError::config)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

fn create_parent(path: &Path) -> Result<(), SqlMetaError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(SqlMetaError::config)?;
    }
    Ok(())
}
