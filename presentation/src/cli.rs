use application::recommend_service::RecommendService;
use application::travel_service::TravelService;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use domain::models::Reply;
use infrastructure::config::Config;
use infrastructure::hf_client::HuggingFaceClient;
use shared::confirmation::{ask_confirmation, ask_text};
use shared::types::Result;
use tracing::debug;

/// Travel recommendations for Pakistani cities, powered by a hosted text-generation model.
#[derive(Parser, Debug)]
#[command(name = "travel_bot", version)]
#[command(about = "Plan your next adventure: ask about food, hotels or attractions in any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Always call the API, even for a question already asked in this session
    #[arg(long, global = true)]
    pub no_cache: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask one question about a city
    Ask {
        /// City to plan for (e.g. Lahore, Hunza, Swat); prompted for when omitted
        #[arg(short, long)]
        city: Option<String>,

        /// The question (e.g. best food, top hotels, tourist places)
        #[arg(trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Ask several questions in one session
    Chat,

    /// Find the closest place in the local dataset
    Recommend {
        /// Show the best K matches instead of one
        #[arg(long, value_name = "K")]
        top: Option<usize>,

        #[arg(trailing_var_arg = true, required = true)]
        query: Vec<String>,
    },

    /// Fit the lookup vectorizer on the local dataset
    Index,
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        debug!(?cli, "parsed arguments");
        let use_cache = !cli.no_cache;
        match cli.command {
            Command::Ask { city, question } => {
                self.handle_ask(city, question.join(" "), use_cache).await
            }
            Command::Chat => self.handle_chat(use_cache).await,
            Command::Recommend { top, query } => self.handle_recommend(&query.join(" "), top),
            Command::Index => self.handle_index(),
        }
    }

    fn travel_service(&self, use_cache: bool) -> Result<TravelService<HuggingFaceClient>> {
        let client = HuggingFaceClient::new(&self.config)?;
        Ok(TravelService::new(client, self.config.retry_policy()).with_cache(use_cache))
    }

    async fn handle_ask(&self, city: Option<String>, question: String, use_cache: bool) -> Result<()> {
        let (city, question) = match city {
            Some(city) => (city, question),
            None if question.trim().is_empty() => read_submission()?,
            None => (ask_text(CITY_PROMPT)?, question),
        };
        let mut service = self.travel_service(use_cache)?;
        eprintln!("{}", "Thinking...".dimmed());
        print_reply(&service.ask(&city, &question).await);
        Ok(())
    }

    async fn handle_chat(&self, use_cache: bool) -> Result<()> {
        let mut service = self.travel_service(use_cache)?;
        println!(
            "{}",
            "Ask your travel questions about any city in Pakistan.".cyan()
        );
        println!("{}", "Try: \"Best food spots in Quetta?\" or \"Famous hotels in Skardu?\"".dimmed());
        loop {
            let (city, question) = read_submission()?;
            let reply = service.ask(&city, &question).await;
            print_reply(&reply);
            if !ask_confirmation("Ask another question?", true)? {
                break;
            }
        }
        Ok(())
    }

    fn handle_recommend(&self, query: &str, top: Option<usize>) -> Result<()> {
        let service =
            RecommendService::load(&self.config.vectorizer_path, &self.config.dataset_path)?;
        match top {
            Some(k) => {
                for rec in service.top_matches(query, k) {
                    println!("{} {}", rec, format!("(score {:.3})", rec.score).dimmed());
                }
            }
            None => {
                if let Some(rec) = service.recommend(query) {
                    println!("{}", rec.to_string().green());
                }
            }
        }
        Ok(())
    }

    fn handle_index(&self) -> Result<()> {
        let vocabulary =
            RecommendService::build_index(&self.config.dataset_path, &self.config.vectorizer_path)?;
        println!(
            "{} {} ({} terms)",
            "Vectorizer written to".green(),
            self.config.vectorizer_path.display(),
            vocabulary
        );
        Ok(())
    }
}

const CITY_PROMPT: &str = "City (e.g. Lahore, Hunza, Swat)";
const QUESTION_PROMPT: &str = "Question (e.g. best food, top hotels, tourist places)";

fn read_submission() -> Result<(String, String)> {
    let city = ask_text(CITY_PROMPT)?;
    let question = ask_text(QUESTION_PROMPT)?;
    Ok((city, question))
}

fn print_reply(reply: &Reply) {
    let text = reply.to_string();
    if reply.is_failure() {
        println!("{}", text.red());
    } else if let Reply::Warning(_) = reply {
        println!("{}", text.yellow());
    } else {
        println!("{}", text.green());
    }
}
