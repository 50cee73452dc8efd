use std::{error::Error, process::ExitCode};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use licensing_paginator::{
    PageQuery, PageSize, Pagination, PaginationConfig, Paginator, render_pagination,
};

/// Print the pagination control for a list of records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The total number of records in the list.
    #[arg(short, long)]
    records: u64,

    /// The page being viewed, as it would appear in the `page` query parameter.
    #[arg(short, long, allow_hyphen_values = true)]
    page: Option<String>,

    /// The path of the list page that the page links point to.
    #[arg(long, default_value = "/")]
    path: String,

    /// The number of records on each page.
    #[arg(long, env = "DEFAULT_PAGE_SIZE", default_value_t = PageSize::default())]
    page_size: PageSize,

    /// How to print the pagination control.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// The view-model as JSON.
    Json,
    /// GOV.UK pagination markup.
    Html,
}

fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("Could not build pagination: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = PaginationConfig {
        page_size: args.page_size,
    };
    let selected_page_number = PageQuery {
        page: args.page.clone(),
    }
    .selected_page_number()?;

    let pagination =
        Paginator::from(&config).paginate(args.records, selected_page_number, &args.path)?;
    tracing::info!(
        "{} records span {} pages of {}",
        args.records,
        pagination.number_of_pages,
        config.page_size
    );

    format_pagination(&pagination, args.format)
}

fn format_pagination(pagination: &Pagination, format: Format) -> Result<String, Box<dyn Error>> {
    let output = match format {
        Format::Json => serde_json::to_string_pretty(pagination)?,
        Format::Html => pagination
            .component
            .as_ref()
            .map(|component| render_pagination(component).into_string())
            .unwrap_or_default(),
    };

    Ok(output)
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .init();
}
