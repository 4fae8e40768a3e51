use clap::Parser;
use gambit_adaptor_web::{EvalApiServer, WebConfig};
use gambit_core::{
    config, ConversationEvaluator, EvaluatorOpts, GambitError, Result,
};
use gambit_provider_openai::{OpenAiProvider, OpenAiProviderConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "GAMBIT_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    config::load_env()?;

    let provider = OpenAiProvider::new(OpenAiProviderConfig::from_env());
    let opts = EvaluatorOpts {
        request_score: config::get_env_bool("GAMBIT_REQUEST_SCORE", true),
        multiline_analysis: config::get_env_bool("GAMBIT_MULTILINE_ANALYSIS", false),
    };
    let evaluator = Arc::new(ConversationEvaluator::new(Arc::new(provider), opts));

    let web_config = WebConfig {
        host: config::get_env_or("GAMBIT_HOST", "127.0.0.1"),
        port: config::get_env_int("GAMBIT_PORT", 5000u16),
        enable_cors: config::get_env_bool("GAMBIT_ENABLE_CORS", true),
    };

    let mut server = EvalApiServer::new(web_config, evaluator);
    server.start().await?;
    info!("run-eval-server ready; press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .map_err(GambitError::from)?;
    server.stop().await?;
    Ok(())
}
