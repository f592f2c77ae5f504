//! `patter chat` — the interactive training session.
//!
//! Opens a readline loop: each line is a trainee turn, each reply is printed
//! as the customer.  When the customer buys or walks out — or the trainee
//! types `/end` — the session is scored and the card is printed.

use std::sync::Arc;

use patter_domain::config::Config;
use patter_domain::{Difficulty, EvaluationResult, Language, PersonaId, ScenarioId, SessionConfig};
use patter_sessions::{Orchestrator, Session, TurnSignal};
use patter_transport::HttpTransport;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Arguments
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, clap::Args)]
pub struct ChatArgs {
    /// Customer persona archetype.
    #[arg(long, default_value = "price-sensitive")]
    pub persona: PersonaId,
    /// Role-play scenario.
    #[arg(long, default_value = "first-visit")]
    pub scenario: ScenarioId,
    /// Training difficulty.
    #[arg(long, default_value = "basic")]
    pub difficulty: Difficulty,
    /// Brand under training; defaults to the configured brand.
    #[arg(long)]
    pub brand: Option<String>,
    /// Session language tag (zh or en); defaults to the configured language.
    #[arg(long)]
    pub language: Option<String>,
}

impl Default for ChatArgs {
    fn default() -> Self {
        Self {
            persona: PersonaId::PriceSensitive,
            scenario: ScenarioId::FirstVisit,
            difficulty: Difficulty::Basic,
            brand: None,
            language: None,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Public entry point
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run the interactive session REPL.
pub async fn run(config: Config, args: ChatArgs) -> anyhow::Result<()> {
    let transport = Arc::new(HttpTransport::from_config(&config.transport)?);
    let orchestrator = Orchestrator::new(transport);

    let session_config = SessionConfig {
        persona: args.persona,
        scenario: args.scenario,
        difficulty: args.difficulty,
        brand: args.brand.unwrap_or_else(|| config.session.brand.clone()),
        language: args
            .language
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or(config.session.language),
    };

    // 1. Welcome chrome to stderr; stdout carries only the conversation.
    eprintln!("Patter interactive training session");
    eprintln!(
        "Persona: {}  |  Scenario: {}  |  Difficulty: {}  |  Language: {}",
        session_config.persona,
        session_config.scenario,
        session_config.difficulty,
        session_config.language,
    );
    eprintln!("Type /end to finish and get scored, /exit to quit, Ctrl+D to exit");
    eprintln!();

    // 2. Start the session — persona generation happens here.
    let session = orchestrator.start_session(session_config).await?;
    if let Some(opening) = session.history().first() {
        println!("customer> {}", opening.text);
    }

    // 3. Readline editor with persistent history.
    let history_path = dirs::home_dir()
        .unwrap_or_default()
        .join(".patter")
        .join("chat_history.txt");
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut rl = rustyline::DefaultEditor::new()?;
    let _ = rl.load_history(&history_path);

    // 4. REPL loop.
    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(&line).ok();

                if trimmed.starts_with('/') {
                    match trimmed {
                        "/exit" => break,
                        "/end" => {
                            score(&orchestrator, &session).await;
                            break;
                        }
                        _ => {
                            eprintln!("unknown command: {trimmed}");
                            continue;
                        }
                    }
                }

                match orchestrator.send_turn(&session, trimmed).await {
                    Ok(outcome) => {
                        println!("customer> {}", outcome.reply);
                        match outcome.signal {
                            TurnSignal::Purchased => {
                                eprintln!("(The customer decided to buy — scoring the session.)");
                                score(&orchestrator, &session).await;
                                break;
                            }
                            TurnSignal::Left => {
                                eprintln!("(The customer left — scoring the session.)");
                                score(&orchestrator, &session).await;
                                break;
                            }
                            TurnSignal::Normal => {}
                        }
                    }
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                eprintln!("(Use Ctrl+D, /end or /exit to quit)");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("readline error: {e}");
                break;
            }
        }
    }

    // 5. Save history and release the session.
    rl.save_history(&history_path).ok();
    orchestrator.reset();
    eprintln!("Goodbye!");
    Ok(())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Scoring output
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

async fn score(orchestrator: &Orchestrator, session: &Session) {
    match orchestrator.end_session(session).await {
        Ok(result) => print_scorecard(&result),
        Err(e) => eprintln!("scoring failed: {e}"),
    }
}

fn print_scorecard(result: &EvaluationResult) {
    println!();
    println!("=== Session evaluation ===");
    println!("Overall score:          {:>5.1}", result.overall_score);
    println!("  Needs discovery:      {:>5.1}", result.dimensions.needs_discovery);
    println!("  Product knowledge:    {:>5.1}", result.dimensions.product_knowledge);
    println!("  Objection handling:   {:>5.1}", result.dimensions.objection_handling);
    println!("  Emotional connection: {:>5.1}", result.dimensions.emotional_connection);
    println!("  Closing skill:        {:>5.1}", result.dimensions.closing_skill);

    if let Some(ref kb) = result.kb_insights {
        if let Some(ref used) = kb.used_knowledge_items {
            if !used.is_empty() {
                println!("Knowledge used:         {}", used.join(", "));
            }
        }
        if let Some(ref missing) = kb.missing_topics {
            if !missing.is_empty() {
                println!("Topics missed:          {}", missing.join(", "));
            }
        }
    }

    if !result.feedback.is_empty() {
        println!();
        println!("{}", result.feedback);
    }
}
