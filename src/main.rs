use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use screen_assist::collab::generator::{GeneratorConfig, HttpQuestionGenerator};
use screen_assist::collab::sink::JsonFileSink;
use screen_assist::collab::{HttpTranslator, IdentityTranslator, LexiconScorer};
use screen_assist::config::InterviewConfig;
use screen_assist::questions::QuestionBank;
use screen_assist::session::{InterviewSession, SessionDeps};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut config = InterviewConfig::default();
    if let Ok(raw) = std::env::var("SCREEN_ASSIST_MAX_QUESTIONS") {
        config.max_questions_per_tech = raw.parse().unwrap_or(config.max_questions_per_tech);
    }

    let data_dir = std::env::var("SCREEN_ASSIST_DATA_DIR")
        .unwrap_or_else(|_| "./interview_transcripts".to_string());

    eprintln!("🤖 Screen Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Transcripts: {data_dir}");
    eprintln!(
        "   Questions per technology: {}",
        config.max_questions_per_tech
    );

    // Optional translation service (LibreTranslate-compatible)
    let translator: Arc<dyn screen_assist::collab::Translator> =
        match std::env::var("SCREEN_ASSIST_TRANSLATE_URL") {
            Ok(url) => {
                eprintln!("   Translation: {url}");
                Arc::new(HttpTranslator::new(
                    url,
                    std::env::var("SCREEN_ASSIST_TRANSLATE_API_KEY").ok(),
                ))
            }
            Err(_) => {
                eprintln!("   Translation: disabled (canonical language only)");
                Arc::new(IdentityTranslator)
            }
        };

    // Optional LLM question generator (OpenAI-compatible endpoint)
    let generator: Option<Arc<dyn screen_assist::collab::QuestionGenerator>> =
        match std::env::var("SCREEN_ASSIST_GENERATOR_URL") {
            Ok(base_url) => {
                let api_key = std::env::var("SCREEN_ASSIST_GENERATOR_API_KEY")
                    .unwrap_or_default();
                let model = std::env::var("SCREEN_ASSIST_GENERATOR_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string());
                eprintln!("   Generator: {model} via {base_url}");
                Some(Arc::new(HttpQuestionGenerator::new(GeneratorConfig {
                    base_url,
                    api_key: secrecy::SecretString::from(api_key),
                    model,
                })))
            }
            Err(_) => {
                eprintln!("   Generator: disabled (predefined questions only)");
                None
            }
        };

    eprintln!("   Type a message and press Enter. Say 'bye' to finish.\n");

    let deps = SessionDeps {
        translator,
        sentiment: Arc::new(LexiconScorer),
        generator,
        sink: Arc::new(JsonFileSink::new(data_dir)),
    };

    let mut session =
        InterviewSession::new(config, Arc::new(QuestionBank::builtin()), deps);

    for message in session.start().await {
        println!("\n{message}\n");
    }

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    eprint!("> ");

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            eprint!("> ");
            continue;
        }

        for message in session.handle_utterance(line).await {
            println!("\n{message}\n");
        }

        if session.is_ended() {
            break;
        }
        eprint!("> ");
    }

    Ok(())
}
