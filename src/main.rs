use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infoagent::api::ChatClient;
use infoagent::core::config::Config;
use infoagent::ui::chat_loop::{self, ChatLoopParams};
use infoagent::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "infoagent")]
#[command(about = "A terminal chat client for the InfoAgent service")]
#[command(long_about = "Infoagent is a full-screen terminal chat client. It sends your messages \
to an InfoAgent backend and renders the replies with headings, lists, and \
syntax-colored code blocks.\n\n\
Environment Variables:\n\
  INFOAGENT_BASE_URL        Backend endpoint base URL\n\
  INFOAGENT_VOICE_COMMAND   Command whose stdout is appended to the input\n\n\
Controls:\n\
  Enter             Send the message\n\
  Tab               Fill the input with an example prompt\n\
  Ctrl+E            Compose the message in $EDITOR\n\
  Ctrl+R            Capture voice input\n\
  Ctrl+Y            Copy the latest code block\n\
  Ctrl+L            Clear the transcript\n\
  Up/Down/Mouse     Scroll through chat history\n\
  Ctrl+C            Quit")]
struct Args {
    #[arg(short, long, help = "Backend endpoint base URL")]
    endpoint: Option<String>,

    #[arg(long, help = "Path to an alternate config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Color theme (dark or light)")]
    theme: Option<String>,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter = if args.debug {
        "infoagent=debug,info"
    } else {
        "infoagent=info,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let endpoint = config.resolve_endpoint(args.endpoint.as_deref());
    let theme = Theme::by_name(&config.resolve_theme(args.theme.as_deref()));
    let client = ChatClient::new(&endpoint)?;
    tracing::debug!(%endpoint, "starting chat session");

    chat_loop::run(ChatLoopParams {
        client,
        theme,
        voice_command: config.resolve_voice_command(),
    })
    .await
}
