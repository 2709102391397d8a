use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use superagent_agents::RoutingAgent;
use superagent_core::Family;
use superagent_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "superagent")]
#[command(about = "SuperAgent query router CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Route a query and print the full reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show how a query is normalized, corrected and scored.
    Classify {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Render the result cards of one template family.
    Build {
        #[arg(long)]
        family: String,
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    Chat,
}

fn main() -> Result<()> {
    init_tracing("superagent_cli");
    let cli = Cli::parse();

    let agent = RoutingAgent::new(AppMetrics::shared());

    match cli.command {
        Command::Ask { text } => {
            let reply = agent.handle_query(&text.join(" "));
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Classify { text } => {
            let trace = agent.explain(&text.join(" "));
            println!("{}", serde_json::to_string_pretty(&trace)?);
        }
        Command::Build { family, query } => {
            let family = family
                .parse::<Family>()
                .context("invalid --family value")?;
            let records = agent.build(&query.join(" "), family);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Chat => run_chat(&agent)?,
    }

    Ok(())
}

fn run_chat(agent: &RoutingAgent) -> Result<()> {
    println!("SuperAgent chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = agent.handle_query(message);
        println!("\n{}\n", reply.reply);

        for record in &reply.details {
            println!("- {} ({})", record.name, record.platform_url);
        }
        if reply.has_details {
            println!();
        }
    }

    Ok(())
}
