//! Terminal shell around the matinee core: one subcommand per user action.

use std::env;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matinee::aggregator::{MovieDbClient, StreamingClient};
use matinee::models::{Movie, MovieMoreInfo};
use matinee::{catalog, ApiClient, Config, Result};

const USAGE: &str = "usage: matinee <command>

commands:
  catalog              show a sampled grid from the bundled top-250 catalog
  search <query>       search the backend for a title
  find <query>         search the movie-database aggregator directly
  info <query>         show details for the best backend match
  add <query>          add the best backend match to the watch-list
  streams <imdbID>     list streaming sites for a title";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "matinee=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_tiles(movies: &[Movie]) {
    if movies.is_empty() {
        println!("no results");
        return;
    }
    for movie in movies {
        let poster = if movie.has_poster() { "" } else { "  [no poster]" };
        println!("{:<44} ({}){}", movie.title, movie.year, poster);
    }
}

fn print_more_info(info: &MovieMoreInfo) {
    println!("{} ({})  {}", info.title, info.year, info.rated);
    println!("  {}", info.plot);
    println!("  Genre:    {}", info.genre);
    println!("  Director: {}", info.director);
    println!("  Actors:   {}", info.actors);
    println!("  Runtime:  {}", info.runtime);
    for rating in &info.ratings {
        println!("  {}: {}", rating.source, rating.value);
    }
}

/// Best backend match for a query, details included; `None` when the search
/// comes back empty.
async fn lookup_details(client: &ApiClient, query: &str) -> Result<Option<MovieMoreInfo>> {
    let results = client.search_title(query).await?;
    match results.first() {
        Some(movie) => Ok(Some(client.more_info(movie).await)),
        None => Ok(None),
    }
}

async fn run(command: &str, rest: &[String]) -> Result<ExitCode> {
    let config = Config::from_env();
    let query = rest.join(" ");

    match command {
        "catalog" => {
            let tiles = catalog::first_results(catalog::top_catalog(), &mut rand::thread_rng());
            print_tiles(&tiles);
        }
        "search" => {
            let client = ApiClient::from_config(&config);
            let results = client.search_title(&query).await?;
            print_tiles(&results);
        }
        "find" => {
            let aggregator = MovieDbClient::from_config(&config)?;
            let results = aggregator.search(&query).await?;
            print_tiles(&results);
        }
        "info" => {
            let client = ApiClient::from_config(&config);
            match lookup_details(&client, &query).await? {
                Some(info) => print_more_info(&info),
                None => println!("no match for '{query}'"),
            }
        }
        "add" => {
            let client = ApiClient::from_config(&config);
            match lookup_details(&client, &query).await? {
                Some(info) => {
                    client.add_to_watch_list(&info).await?;
                    println!("added '{}' to watch-list", info.title);
                }
                None => println!("no match for '{query}'"),
            }
        }
        "streams" => {
            let streaming = StreamingClient::from_config(&config)?;
            for site in streaming.streaming_sites(&query).await {
                println!("{:<24} {}", site.display_name, site.url);
            }
        }
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(command, &args[1..]).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("matinee: {err}");
            ExitCode::FAILURE
        }
    }
}
