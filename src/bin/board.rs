//! Drives the view synchronizer from the terminal against a running backend.
//!
//! Commands, one per line:
//!   list                       print every card
//!   email <address>            fill the email input
//!   select <activity>          choose an activity
//!   submit                     submit the signup form
//!   remove <activity> | <email>
//!   status                     print the status banner
//!   quit

use activity_board::banner::StatusBanner;
use activity_board::client::HttpActivityApi;
use activity_board::surface::{ControlTarget, DELETE_CONTROL_CLASS, Page};
use activity_board::sync::Outcome;
use activity_board::{Config, Synchronizer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

type Board = Synchronizer<HttpActivityApi, Page>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!(api = %config.api_url, "connecting");
    let api = HttpActivityApi::new(&config.api_url)?;
    let banner = StatusBanner::new(config.status_hide_after, config.status_ordering);
    let board = Synchronizer::new(api, Page::new(), banner);

    board.load().await;
    print_cards(&board).await;
    print_status(&board).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match command {
            "" => continue,
            "list" => print_cards(&board).await,
            "email" => board.with_surface(|page| page.set_email(rest)).await,
            "select" => board.with_surface(|page| page.select_activity(rest)).await,
            "submit" => {
                let outcome = board.submit_signup().await;
                report(&board, outcome).await;
            }
            "remove" => match rest.split_once('|') {
                Some((activity, email)) => {
                    let target = ControlTarget {
                        class_name: DELETE_CONTROL_CLASS.to_string(),
                        email: Some(email.trim().to_string()),
                    };
                    let outcome = board.activate(activity.trim(), &target).await;
                    report(&board, outcome).await;
                }
                None => println!("usage: remove <activity> | <email>"),
            },
            "status" => print_status(&board).await,
            "quit" | "exit" => break,
            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}

async fn report(board: &Board, outcome: Outcome) {
    if outcome == Outcome::Applied {
        print_cards(board).await;
    }
    print_status(board).await;
}

async fn print_cards(board: &Board) {
    let cards = board.with_surface(|page| page.cards().to_vec()).await;
    for card in cards {
        println!("{}", card.markup);
    }
}

async fn print_status(board: &Board) {
    match board.banner().current().await {
        Some(message) => println!("[{}] {}", message.severity.as_class(), message.text),
        None => println!("[status hidden]"),
    }
}
