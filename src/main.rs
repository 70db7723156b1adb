use clap::Parser;
use flashquiz::{db::Db, AfterAddQuestion, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL. The file is created when missing.
    #[arg(long, env, default_value = "sqlite://flashquiz.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// Mark session cookies `Secure` (serve over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,

    /// Where "continue adding" lands after a question is added.
    #[arg(long, env, value_enum, default_value_t = AfterAddQuestion::SetPage)]
    after_add_question: AfterAddQuestion,

    /// Show "Question added!" and "Set updated successfully!" after redirects.
    #[arg(long, env, default_value_t = true, action = clap::ArgAction::Set)]
    flash_messages: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower=info,flashquiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;
    let state = AppState {
        secure_cookies: args.secure_cookies,
        after_add_question: args.after_add_question,
        flash_messages: args.flash_messages,
        ..AppState::new(db)
    };
    let app = flashquiz::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
