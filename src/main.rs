use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use outfit_vault::args::Args;
use outfit_vault::config::Config;
use outfit_vault::data::{CategoryItems, MuscleGroup};
use outfit_vault::file_ops::{load_catalog, load_muscle_catalog};
use outfit_vault::gate::AccessGate;
use outfit_vault::matcher::get_match;
use outfit_vault::output::render_page;
use outfit_vault::render::{render_category, render_muscle_page, Page};
use outfit_vault::resolver::AssetRoot;
use outfit_vault::{CatalogError, Result};

fn read_password() -> Result<String> {
    eprint!("Enter password to unlock outfits: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CatalogError::io("<stdin>", e))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_list(title: &str, names: &[String]) {
    println!("{}: ", title);
    for name in names {
        println!("{}", name);
    }
}

/// Picks a muscle group, or lists the choices when none was asked for.
fn select_muscle_group(
    groups: &[MuscleGroup],
    args: &Args,
    root: &AssetRoot,
) -> Result<Option<Page>> {
    let names: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();

    let Some(query) = args.muscle_group.as_deref() else {
        print_list("Muscle groups", &names);
        return Ok(None);
    };
    if args.list_muscle_groups {
        print_list("Muscle groups", &names);
    }

    let matched = get_match(query, &names, "muscle group")?;
    Ok(groups
        .iter()
        .find(|g| g.name == matched)
        .map(|group| render_muscle_page(group, root)))
}

fn select_page(args: &Args, config: &Config) -> Result<Option<Page>> {
    let root = &config.asset_root;

    if args.muscles {
        let path = config.muscle_catalog_path();
        let groups = load_muscle_catalog(&path)?.ok_or_else(|| {
            CatalogError::Config(format!("no muscle catalog found at {}", path.display()))
        })?;
        return select_muscle_group(&groups, args, root);
    }

    let catalog = load_catalog(&config.data_dir, &config.muscle_catalog)?;
    for skipped in catalog.skipped() {
        eprintln!("Skipped {}: {}", skipped.path.display(), skipped.reason);
    }

    let Some(query) = args.category.as_deref() else {
        print_list("Categories", &catalog.names());
        return Ok(None);
    };
    if args.list_categories {
        print_list("Categories", &catalog.names());
    }

    let name = get_match(query, &catalog.names(), "category")?;
    let Some(category) = catalog.get(&name) else {
        return Ok(None);
    };

    match &category.items {
        CategoryItems::Outfits(_) => Ok(render_category(category, root)),
        CategoryItems::MuscleGroups(groups) => select_muscle_group(groups, args, root),
    }
}

fn run(args: Args, config: Config) -> Result<()> {
    let gate = AccessGate::new(config.password.clone())?;
    let input = match args.password.clone() {
        Some(password) => password,
        None => read_password()?,
    };
    gate.check(&input)?;

    let Some(page) = select_page(&args, &config)? else {
        return Ok(());
    };
    let rendered = render_page(&page, args.format);

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(CatalogError::Output)?;
            println!("Wrote {} to {}", page.heading, path.display());
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(CatalogError::Output)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
