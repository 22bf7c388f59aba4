use std::{env, process::ExitCode};

use dotenv::dotenv;
use serde::Serialize;
use wikiquote::{RequestOptions, Result, WikiquoteClient, WikiquoteError};

const USAGE: &str = "usage: wikiquote <search|title|people|sections|section|list|list-id|random|random-id> <query|page> [section]";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| WikiquoteError::decode("output", e))?;
    println!("{}", text);
    Ok(())
}

fn parse_id(arg: &str) -> Option<u64> {
    arg.parse::<u64>()
        .inspect_err(|e| log::error!("{:?} is not a page id ({})", arg, e))
        .ok()
}

async fn run(client: &WikiquoteClient, command: &str, args: &[String]) -> Result<bool> {
    let opts = RequestOptions::default();
    let arg = args.first().map(String::as_str).unwrap_or_default();

    match command {
        "search" => print_json(&wikiquote::search(client, arg, &opts).await?)?,
        "title" => print_json(&wikiquote::search_by_title(client, arg, &opts).await?)?,
        "people" => print_json(&wikiquote::search_people(client, arg, &opts).await?)?,
        "sections" => print_json(&wikiquote::get_page_sections(client, arg, &opts).await?)?,
        "section" => {
            let Some(index) = args.get(1) else {
                return Ok(false);
            };
            print_json(&wikiquote::get_section_content(client, arg, index, &opts).await?)?
        }
        "list" => print_json(&wikiquote::list(client, arg, &opts).await?)?,
        "list-id" => {
            let Some(id) = parse_id(arg) else {
                return Ok(false);
            };
            print_json(&wikiquote::list_by_id(client, id, &opts).await?)?
        }
        "random" => println!("{}", wikiquote::get_random_quote(client, arg, &opts).await?),
        "random-id" => {
            let Some(id) = parse_id(arg) else {
                return Ok(false);
            };
            println!("{}", wikiquote::get_random_quote_by_id(client, id, &opts).await?)
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<String>>();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let base_url = env::var("WIKIQUOTE_API").ok();
    let user_agent = env::var("WIKIQUOTE_USER_AGENT").ok();
    let client = match WikiquoteClient::new(base_url.as_deref(), user_agent.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, command, rest).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("[{}] {}", e.kind(), e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
