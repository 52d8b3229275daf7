use structopt::StructOpt;

use tenor::{ClientConfig, GifObject, Params, TenorApiError, TenorClient};

#[derive(Debug, StructOpt)]
#[structopt(name = "gifvu", about = "Search Tenor for GIFs from the command line")]
struct Options
{
    /// Tenor API key
    #[structopt(long, env = "TENOR_API_KEY")]
    key: String,

    /// Two-letter country code applied to every request
    #[structopt(long)]
    country: Option<String>,

    /// Language/locale applied to every request, e.g. en_AU
    #[structopt(long)]
    locale: Option<String>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command
{
    /// Search for GIFs matching a term
    Search
    {
        term: String,

        #[structopt(long, default_value = "10")]
        limit: i64,
    },
    /// Show the currently trending GIFs
    Trending
    {
        #[structopt(long, default_value = "10")]
        limit: i64,
    },
    /// List the available GIF categories
    Categories,
    /// Suggest search terms related to a term
    Suggest
    {
        term: String,

        #[structopt(long, default_value = "10")]
        limit: i64,
    },
}

fn main()
{
    let options = Options::from_args();

    let config = ClientConfig
    {
        key: options.key.clone(),
        client_key: Some("gifvu".to_owned()),
        country: options.country.clone(),
        locale: options.locale.clone(),
    };

    let client = TenorClient::new(config);

    if let Err(err) = run(&client, &options.command)
    {
        eprintln!("gifvu: {}", err);
        std::process::exit(1);
    }
}

fn run(client: &TenorClient, command: &Command) -> Result<(), TenorApiError>
{
    match command
    {
        Command::Search{term, limit} =>
        {
            let response = client.search(Params::new()
                .search_term(term.clone())
                .limit(*limit))?;

            for gif in &response.results
            {
                println!("{}", gif_url(gif));
            }
        },
        Command::Trending{limit} =>
        {
            let response = client.featured(Params::new().limit(*limit))?;

            for gif in &response.results
            {
                println!("{}", gif_url(gif));
            }
        },
        Command::Categories =>
        {
            let response = client.categories(Params::new())?;

            for tag in &response.tags
            {
                println!("{}", tag.name);
            }
        },
        Command::Suggest{term, limit} =>
        {
            let response = client.search_suggestions(Params::new()
                .search_term(term.clone())
                .limit(*limit))?;

            for term in &response.results
            {
                println!("{}", term);
            }
        },
    }

    Ok(())
}

fn gif_url(gif: &GifObject) -> String
{
    // Prefer the full-size GIF rendition, then the item page

    if let Some(media) = gif.media_formats.get("gif")
    {
        return media.url.clone();
    }

    if let Some(url) = &gif.url
    {
        return url.clone();
    }

    gif.id.clone()
}
