use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

use wraithdeck::{api, config, content, feed, github, lanyard, logging, tui, view};

#[derive(Parser, Debug)]
#[command(name = "wraithdeck")]
#[command(version = env!("WRAITHDECK_VERSION"))]
#[command(about = "Terminal deck for the WraithsDev profile: live presence, Spotify and GitHub")]
struct Args {
    /// Log feed frames and poll results to the log file
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current presence snapshot and exit
    Status,

    /// Print the repository grid and exit
    Repos,

    /// Show the config file path and effective settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    logging::cleanup_old_logs();
    logging::info("wraithdeck starting");

    let args = Args::parse();

    if args.trace {
        // No tasks are running yet
        unsafe { std::env::set_var("WRAITHDECK_TRACE", "1") };
    }

    if let Err(e) = run_main(args).await {
        logging::error(&format!("{:?}", e));
        return Err(e);
    }

    Ok(())
}

async fn run_main(args: Args) -> Result<()> {
    let config = config::config();

    match args.command {
        Some(Command::Status) => run_status(config).await?,
        Some(Command::Repos) => run_repos(config).await?,
        Some(Command::Config { init }) => run_config(init)?,
        None => run_tui(config).await?,
    }

    Ok(())
}

async fn run_tui(config: &config::Config) -> Result<()> {
    let client = api::client()?;
    let (tx, rx) = mpsc::channel(64);

    let discord_id = config.profile.discord_id.clone();
    let handles = vec![
        feed::spawn_initial_presence(
            client.clone(),
            lanyard::rest::API_BASE.to_string(),
            discord_id.clone(),
            tx.clone(),
        ),
        feed::spawn_presence_socket(
            lanyard::socket::SOCKET_URL.to_string(),
            discord_id.clone(),
            tx.clone(),
        ),
        feed::spawn_activity_poll(
            client.clone(),
            lanyard::rest::API_BASE.to_string(),
            discord_id,
            tx.clone(),
        ),
        feed::spawn_repo_fetch(
            client,
            github::API_BASE.to_string(),
            config.profile.github_user.clone(),
            config.profile.repo_limit,
            tx,
        ),
    ];

    let terminal = ratatui::init();
    let app = tui::App::new(config.clone());
    let result = app.run(terminal, rx).await;
    ratatui::restore();

    for handle in handles {
        handle.abort();
    }

    result
}

async fn run_status(config: &config::Config) -> Result<()> {
    let client = api::client()?;
    let presence = lanyard::rest::fetch_presence(
        &client,
        lanyard::rest::API_BASE,
        &config.profile.discord_id,
    )
    .await?;

    let header = view::presence_view(&presence, &config.profile.fallback_avatar);
    let name = header.username.as_deref().unwrap_or(content::NAME);
    println!("{} is {}", name, header.status.label());
    println!("avatar: {}", header.avatar_url);

    let activity = view::activity_view(&presence, chrono::Utc::now().timestamp_millis());
    if let Some(track) = &activity.track {
        println!(
            "listening: {} - {} [{} / {}]",
            track.artist, track.song, track.elapsed, track.total
        );
    }
    if let Some(game) = &activity.game {
        match game.minutes_playing {
            Some(minutes) => println!("playing: {} ({} min)", game.name, minutes),
            None => println!("playing: {}", game.name),
        }
    }

    Ok(())
}

async fn run_repos(config: &config::Config) -> Result<()> {
    let client = api::client()?;
    let repos = github::fetch_top_repos(
        &client,
        github::API_BASE,
        &config.profile.github_user,
        config.profile.repo_limit,
    )
    .await?;

    if repos.is_empty() {
        println!("No public repositories for {}", config.profile.github_user);
        return Ok(());
    }
    for repo in &repos {
        println!(
            "{}  ★{} ⑂{}",
            repo.name, repo.stargazers_count, repo.forks_count
        );
        println!("    {}", repo.description_or_default());
        if let Some(language) = &repo.language {
            println!("    {}", language);
        }
        println!("    {}", repo.html_url);
    }

    Ok(())
}

fn run_config(init: bool) -> Result<()> {
    if init {
        let path = config::Config::create_default_config_file()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    match config::Config::path() {
        Some(path) => println!("config file: {}", path.display()),
        None => println!("config file: (no home directory)"),
    }
    println!();
    print!("{}", toml::to_string_pretty(config::config())?);

    Ok(())
}
