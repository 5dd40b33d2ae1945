use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};

use locale_edge::config::load_or_default;
use locale_edge::lifecycle::build_components;
use locale_edge::routing::{RequestPath, RoutingAction};
use locale_edge::seo::SitemapEmitter;

#[derive(Parser)]
#[command(name = "locale-cli")]
#[command(about = "Inspect locale routing and canonical URLs offline", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a request path is classified and routed
    Route { path: String },
    /// Print the canonical URL and hreflang alternates of a content path
    Canonical {
        path: String,
        /// Locale to build the canonical URL for (the path's locale prefix,
        /// else the default locale, if omitted)
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Print the sitemap XML
    Sitemap,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;
    let components = build_components(&config)?;

    match cli.command {
        Commands::Route { path } => {
            let decision = components.router.decide(&path);
            println!("path:           {}", decision.path);
            println!("classification: {}", decision.classification);
            println!(
                "locale:         {}",
                decision.served_locale.as_deref().unwrap_or("-")
            );
            match decision.action {
                RoutingAction::PassThrough => println!("action:         pass through"),
                RoutingAction::Redirect { location, status } => {
                    println!("action:         redirect {} {}", status.as_u16(), location)
                }
                RoutingAction::InternalRewrite { path } => {
                    println!("action:         rewrite {path}")
                }
            }
        }
        Commands::Canonical { path, locale } => {
            let registry = &components.registry;
            let (prefix, content) = components.urls.split_locale(&RequestPath::parse(&path));
            let locale = match locale {
                Some(code) => registry
                    .get(&code)
                    .ok_or_else(|| format!("unsupported locale '{code}'"))?,
                None => prefix.unwrap_or_else(|| registry.default_locale()),
            };
            let page = components.urls.build(&content, locale);
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Commands::Sitemap => {
            let routes = config.effective_routes();
            let emitter = SitemapEmitter::new(&components.urls, &routes, &config.sitemap);
            print!("{}", emitter.render(Utc::now()));
        }
    }

    Ok(())
}
