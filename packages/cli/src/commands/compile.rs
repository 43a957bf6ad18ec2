use crate::config::Config;
use crate::store::FilePageStore;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_compiler_html::{compile_page, CompileOptions, CompileService, TracingViewLog};
use pagesmith_model::Page;
use pagesmith_renderer::Registry;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Page record file or directory to compile (defaults to the configured
    /// pages directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Compile a single page by id through the page store
    #[arg(long)]
    pub page: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Render in preview mode (suppresses tracking)
    #[arg(long)]
    pub preview: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let out_dir = PathBuf::from(cwd).join(args.out_dir.as_deref().unwrap_or(&config.out_dir));

    if let Some(page_id) = args.page.clone() {
        return compile_by_id(&page_id, &args, &config, cwd, &out_dir);
    }

    let target = PathBuf::from(cwd).join(&args.path);
    let page_files = if target.is_file() {
        vec![target]
    } else if args.path == "." {
        find_page_files(&config.get_pages_dir(cwd))?
    } else {
        find_page_files(&target)?
    };

    if page_files.is_empty() {
        println!("{}", "⚠️  No .page.json files found".yellow());
        return Ok(());
    }

    println!("{}", "🔨 Compiling pages...".bright_blue().bold());
    println!("Found {} records", page_files.len());

    let registry = Registry::standard();
    let options = CompileOptions {
        preview: args.preview,
        ..Default::default()
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &page_files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        match compile_file(file, &registry, &options, &out_dir, args.stdout) {
            Ok(output) => {
                success_count += 1;
                println!("  {} {} → {}", "✓".green(), name, output);
            }
            Err(e) => {
                error_count += 1;
                eprintln!("  {} {} - {}", "✗".red(), name, e.to_string().red());
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} pages successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Compiled {} pages, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn compile_by_id(
    page_id: &str,
    args: &CompileArgs,
    config: &Config,
    cwd: &str,
    out_dir: &Path,
) -> Result<()> {
    let store = FilePageStore::new(config.get_pages_dir(cwd));
    let service = CompileService::new(store, TracingViewLog);

    let html = if args.preview {
        service.render_preview(page_id)?
    } else {
        service.render_live(page_id)?
    };

    if args.stdout {
        println!("{}", html);
    } else {
        fs::create_dir_all(out_dir)?;
        let out_path = out_dir.join(format!("{}.html", page_id));
        fs::write(&out_path, html)?;
        println!("  {} {} → {}", "✓".green(), page_id, out_path.display());
    }
    Ok(())
}

fn compile_file(
    path: &Path,
    registry: &Registry,
    options: &CompileOptions,
    out_dir: &Path,
    stdout: bool,
) -> Result<String> {
    let content = fs::read_to_string(path)?;
    let page = Page::from_json(&content)?;
    let html = compile_page(registry, &page, options)?;

    if stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(format!("{}.html", page.page_id));
    fs::write(&out_path, html)?;
    Ok(out_path.display().to_string())
}

fn find_page_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(anyhow!("Pages directory does not exist: {:?}", dir));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_record = path
            .file_name()
            .map(|n| n.to_string_lossy().ends_with(".page.json"))
            .unwrap_or(false);
        if path.is_file() && is_record {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
