//! CLI King of the Beards example.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use kotb::{Card, Game, GameOptions, GameState, Locale, PlayerRoster, rules_summary};

const REVEAL_DELAY: Duration = Duration::from_millis(600);

fn main() {
    env_logger::init();

    let locale = match std::env::args().nth(1).as_deref() {
        Some("en") => Locale::English,
        _ => Locale::French,
    };
    let options = GameOptions::default().with_locale(locale);

    println!("King of the Beards CLI example");
    println!("Add players one per line; empty line to start, '?' for the rules.");

    let mut roster = PlayerRoster::with_max_name_len(options.max_name_len);
    let mut game = Game::from_entropy(options);

    loop {
        let input = prompt_line(&format!("Player {}: ", roster.len() + 1));
        match input.as_str() {
            "?" => println!("\n{}\n", rules_summary(locale)),
            "" if roster.len() >= game.options().required_players() => break,
            "" => println!(
                "At least {} players are needed.",
                game.options().required_players()
            ),
            name => {
                if let Err(err) = roster.add(name) {
                    println!("Cannot add {name}: {err}");
                }
            }
        }
    }

    if let Err(err) = game.start(roster) {
        println!("Start error: {err}");
        return;
    }

    loop {
        match game.state() {
            GameState::AwaitingDraw { .. } => {
                let player = game.active_player().unwrap_or_default();
                let input = prompt_line(&format!(
                    "\n{player}, press Enter to draw ({} left, 'q' to quit): ",
                    game.cards_remaining()
                ));
                if input == "q" {
                    break;
                }

                match game.draw() {
                    Ok(outcome) => {
                        thread::sleep(REVEAL_DELAY);
                        print_card(outcome.card, locale);
                        if outcome.king {
                            println!("{}", colorize("*** Long live the King! ***", "1;33"));
                        }
                    }
                    Err(err) => println!("Draw error: {err}"),
                }
            }
            GameState::CardRevealed { .. } => {
                if let Err(err) = game.advance() {
                    println!("Advance error: {err}");
                }
            }
            GameState::Ended => {
                println!("\nThe deck is empty, game over!");
                if prompt_line("New game? (y/n): ") != "y" {
                    break;
                }
                if let Err(err) = game.restart() {
                    println!("Restart error: {err}");
                    break;
                }
            }
            GameState::NotStarted => break,
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_string(),
    }
}

fn print_card(card: Card, locale: Locale) {
    let code = if card.is_red() { "31" } else { "37" };
    println!("\n  {}", colorize(&card.to_string(), code));
    println!("  {}", card.rule(locale));
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
