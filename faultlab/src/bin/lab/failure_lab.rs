//! Headless driver for the failure lab.
//!
//! Runs a scenario from the command line: either a scripted list of action
//! ids (useful for demos and piping `--json` output elsewhere) or an
//! interactive loop reading ids from stdin. The `quiz` subcommand drives
//! the symptom mini-quiz the same way.
//!
//! ```text
//! failure_lab run retry_storm retry_harder retry_harder retry_budget
//! failure_lab run resource_exhaustion --json restart restart
//! failure_lab run backpressure        # interactive
//! failure_lab quiz
//! ```

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faultlab::{LabSession, ScenarioKey, SymptomQuiz};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "failure_lab")]
#[command(about = "Interactive lab for classic distributed-systems failure shapes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario, scripted or interactively.
    Run {
        /// Scenario key: retry_storm, backpressure or resource_exhaustion.
        scenario: String,

        /// Action ids to apply in order. With none, reads ids from stdin.
        actions: Vec<String>,

        /// Emit each log entry and the final report as JSON lines.
        #[arg(long)]
        json: bool,
    },
    /// Run the symptom-matching mini-quiz on stdin.
    Quiz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    match args.command {
        Command::Run {
            scenario,
            actions,
            json,
        } => {
            let key: ScenarioKey = scenario.parse()?;
            if actions.is_empty() {
                run_interactive(key)
            } else {
                run_scripted(key, &actions, json)
            }
        }
        Command::Quiz => run_quiz(),
    }
}

/// Apply a fixed action list and print the trajectory.
fn run_scripted(
    key: ScenarioKey,
    actions: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = LabSession::new(key);

    for id in actions {
        match session.apply(id) {
            Some(entry) if json => println!("{}", serde_json::to_string(entry)?),
            Some(entry) => {
                println!("[{}] {}", entry.action_id, entry.result.headline);
                println!("    {}", session.snapshot());
            }
            None => eprintln!("unknown action id: {id:?} (ignored)"),
        }
    }

    let report = session.report();
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print!("\n{report}");
    }
    Ok(())
}

/// Read action ids from stdin until EOF or `quit`.
fn run_interactive(key: ScenarioKey) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = LabSession::new(key);
    let spec = session.scenario();

    println!("{}", spec.prompt_title);
    println!("{}\n", spec.prompt_body);
    println!("{}\n", spec.diagram);
    println!("Instincts:");
    for action in &spec.actions {
        println!("  {:<20} {}", action.id, action.label);
    }
    println!("  {:<20} back to the initial state", "reset");
    println!("  {:<20} leave the lab\n", "quit");

    let stdin = io::stdin();
    loop {
        print!("{} > ", session.snapshot());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "" => continue,
            "quit" => break,
            "reset" => {
                session.reset();
                println!("back to the initial state\n");
            }
            id => {
                let was_revealed = session.revealed();
                match session.apply(id) {
                    Some(entry) => {
                        println!("\n{}", entry.result.headline);
                        println!("{}\n", entry.result.narrative);
                        if let Some(reveal) = &entry.result.reveal {
                            if !was_revealed {
                                println!("Shape revealed: {reveal}\n");
                            }
                        }
                    }
                    None => println!("unknown action id: {id:?}\n"),
                }
            }
        }
    }

    print!("\n{}", session.report());
    Ok(())
}

/// Stdin loop over the three symptom questions.
fn run_quiz() -> Result<(), Box<dyn std::error::Error>> {
    let mut quiz = SymptomQuiz::new();
    let stdin = io::stdin();

    println!("Type the failure shape that best matches each symptom pattern.");
    println!("(empty line for the next question, `quit` to leave)\n");

    loop {
        let question = quiz.current_question();
        println!("Symptom pattern: {}", question.prompt);
        print!("your answer > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "quit" => break,
            "" => {
                quiz.next();
                continue;
            }
            answer => {
                quiz.pick(answer);
                match quiz.is_correct() {
                    Some(true) => println!("Correct: {}\n", quiz.correct_label()),
                    _ => println!("Not quite. The best match is: {}\n", quiz.correct_label()),
                }
                quiz.next();
            }
        }
    }

    Ok(())
}
