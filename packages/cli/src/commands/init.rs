use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Pages directory
    #[arg(long, default_value = "pages")]
    pub pages_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagesmith project...".bright_blue().bold()
    );

    // Create pages directory if it doesn't exist
    let pages_dir = PathBuf::from(cwd).join(&args.pages_dir);
    if !pages_dir.exists() {
        fs::create_dir_all(&pages_dir)?;
        println!("  {} Created {}/", "✓".green(), args.pages_dir);
    }

    // Create example page record
    let example_file = pages_dir.join("welcome.page.json");
    if !example_file.exists() {
        let example_content = r##"{
  "pageId": "welcome",
  "settings": {
    "title": "Welcome",
    "description": "A first Pagesmith page"
  },
  "components": [
    { "id": "hero", "kind": "heading", "props": { "text": "Hello, Pagesmith", "level": 1, "align": "center" } },
    { "id": "intro", "kind": "text", "props": { "text": "Assemble pages from typed components and compile them to standalone HTML.", "align": "center" } },
    { "id": "cta", "kind": "button", "props": { "label": "Get started", "href": "#start", "align": "center" } },
    {
      "id": "gallery",
      "kind": "carousel",
      "props": {
        "images": [
          { "url": "https://placehold.co/800x400?text=One", "alt": "First slide" },
          { "url": "https://placehold.co/800x400?text=Two", "alt": "Second slide" }
        ],
        "autoplay": true
      }
    }
  ]
}
"##;
        fs::write(&example_file, example_content)?;
        println!(
            "  {} Created {}/welcome.page.json",
            "✓".green(),
            args.pages_dir
        );
    }

    // Write config
    let config = Config {
        pages_dir: args.pages_dir.clone(),
        ..Default::default()
    };
    fs::write(
        &config_path,
        serde_json::to_string_pretty(&config)? + "\n",
    )?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!(
        "Run {} to compile the example page",
        "pagesmith compile".bright_white()
    );
    Ok(())
}
