mod catalog;

use clap::{Parser, Subcommand};
use lofa_catalog::{
    query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, DEFAULT_PRESET_LIMIT},
    OrderBy, ProductPreset, ProductQuery, SortOrder, WooCommerceClient,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lofa-cli")]
#[command(about = "Query the Lofa storefront catalog and print normalized JSON")]
struct Cli {
    /// Store root URL; overrides `WOOCOMMERCE_URL` from the environment.
    #[arg(long, global = true)]
    store_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List one page of products.
    Products {
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..=100))]
        per_page: u32,
        /// Numeric category id or category slug.
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        featured: Option<bool>,
        #[arg(long)]
        on_sale: Option<bool>,
        #[arg(long, default_value = "date")]
        orderby: OrderBy,
        #[arg(long, default_value = "desc")]
        order: SortOrder,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Featured products, newest first.
    Featured {
        #[arg(long, default_value_t = DEFAULT_PRESET_LIMIT, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
    /// Products currently on sale, newest first.
    OnSale {
        #[arg(long, default_value_t = DEFAULT_PRESET_LIMIT, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
    /// Newest products.
    Latest {
        #[arg(long, default_value_t = DEFAULT_PRESET_LIMIT, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
    /// Products ordered by popularity.
    BestSelling {
        #[arg(long, default_value_t = DEFAULT_PRESET_LIMIT, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
    /// All non-empty categories.
    Categories,
    /// A single product by numeric id.
    Product { id: u64 },
    /// Full-text product search.
    Search {
        query: String,
        #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = lofa_core::load_app_config()?;
    if let Some(store_url) = cli.store_url {
        config.woocommerce_url = store_url;
    }

    // Logs go to stderr so stdout stays parseable JSON.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = WooCommerceClient::from_app_config(&config)?;
    tracing::debug!(store_url = %config.woocommerce_url, command = ?cli.command, "querying catalog");

    let output = match cli.command {
        Commands::Products {
            page,
            per_page,
            category,
            featured,
            on_sale,
            orderby,
            order,
            slug,
            search,
        } => {
            let query = ProductQuery {
                per_page,
                page: page.max(1),
                category,
                featured,
                on_sale,
                orderby,
                order,
                slug,
                search,
            };
            catalog::run_products(&client, &query).await?
        }
        Commands::Featured { limit } => {
            catalog::run_preset(&client, ProductPreset::Featured, limit).await?
        }
        Commands::OnSale { limit } => {
            catalog::run_preset(&client, ProductPreset::OnSale, limit).await?
        }
        Commands::Latest { limit } => {
            catalog::run_preset(&client, ProductPreset::Latest, limit).await?
        }
        Commands::BestSelling { limit } => {
            catalog::run_preset(&client, ProductPreset::BestSelling, limit).await?
        }
        Commands::Categories => catalog::run_categories(&client).await?,
        Commands::Product { id } => catalog::run_product(&client, id).await?,
        Commands::Search { query, limit } => catalog::run_search(&client, &query, limit).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
