//! Game integration tests.

use std::collections::HashSet;

use kotb::{
    AdvanceError, Card, Color, DECK_SIZE, Deck, DrawError, Game, GameOptions, GameState, Locale,
    PlayerRoster, Rank, RosterError, StartError, Suit, rule_for, rule_text, rules_summary,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn roster(names: &[&str]) -> PlayerRoster {
    PlayerRoster::from_names(names).unwrap()
}

fn started_game(names: &[&str], seed: u64) -> Game {
    let mut game = Game::new(GameOptions::default(), seed);
    game.start(roster(names)).unwrap();
    game
}

fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    game.stack_deck(Deck::from(cards));
}

#[test]
fn start_shuffles_a_full_deck() {
    let game = started_game(&["A", "B"], 1);

    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.state(), GameState::AwaitingDraw { player: 0 });
    assert_eq!(game.active_player(), Some("A"));
    assert_eq!(game.current_card(), None);

    let distinct: HashSet<Card> = game.deck().cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert_ne!(game.deck(), &Deck::new());
}

#[test]
fn start_rejects_single_player() {
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.start(roster(&["A"])).unwrap_err(),
        StartError::InsufficientPlayers {
            required: 2,
            found: 1
        }
    );
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.cards_remaining(), 0);
    assert!(game.roster().is_empty());
}

#[test]
fn start_respects_configured_minimum() {
    let mut game = Game::new(GameOptions::default().with_min_players(3), 1);

    assert!(game.start(roster(&["A", "B"])).is_err());
    game.start(roster(&["A", "B", "C"])).unwrap();
    assert_eq!(game.active_index(), Some(0));
}

#[test]
fn start_never_allows_a_single_player() {
    let mut game = Game::new(GameOptions::default().with_min_players(1), 1);

    assert_eq!(
        game.start(roster(&["Solo"])).unwrap_err(),
        StartError::InsufficientPlayers {
            required: 2,
            found: 1
        }
    );
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.options().required_players(), 2);
}

#[test]
fn start_applies_configured_name_limit() {
    let mut game = Game::new(GameOptions::default().with_max_name_len(3), 1);

    assert_eq!(
        game.start(roster(&["Ann", "Bartholomew"])).unwrap_err(),
        StartError::NameTooLong {
            index: 1,
            max_len: 3
        }
    );
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.active_player(), None);

    game.start(roster(&["Ann", "Bob"])).unwrap();
    assert_eq!(game.active_player(), Some("Ann"));
}

#[test]
fn options_are_readable_from_the_game() {
    let options = GameOptions::default()
        .with_min_players(3)
        .with_max_name_len(8)
        .with_locale(Locale::English);
    let game = Game::new(options.clone(), 1);

    assert_eq!(game.options(), &options);
}

#[test]
fn stacked_deck_is_drawn_in_order() {
    let mut game = started_game(&["A", "B"], 2);
    set_deck_from_draws(
        &mut game,
        &[card(Rank::Five, Suit::Clubs), card(Rank::Six, Suit::Hearts)],
    );

    assert_eq!(game.deck().len(), 2);
    assert_eq!(game.draw().unwrap().card, card(Rank::Five, Suit::Clubs));
    game.advance().unwrap();
    assert_eq!(game.draw().unwrap().card, card(Rank::Six, Suit::Hearts));
}

#[test]
fn failed_start_keeps_running_game() {
    let mut game = started_game(&["A", "B"], 3);
    game.draw().unwrap();
    let before = game.state();

    assert!(game.start(roster(&["Solo"])).is_err());
    assert_eq!(game.state(), before);
    assert_eq!(game.roster().names(), ["A", "B"]);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn draw_and_advance_rotate_players() {
    let mut game = started_game(&["A", "B"], 7);

    let outcome = game.draw().unwrap();
    assert_eq!(outcome.player_index, 0);
    assert_eq!(
        game.state(),
        GameState::CardRevealed {
            player: 0,
            card: outcome.card
        }
    );
    assert_eq!(game.current_card(), Some(outcome.card));
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);

    assert_eq!(game.advance(), Ok(GameState::AwaitingDraw { player: 1 }));
    assert_eq!(game.active_player(), Some("B"));
    assert_eq!(game.current_card(), None);

    game.draw().unwrap();
    assert_eq!(game.advance(), Ok(GameState::AwaitingDraw { player: 0 }));
}

#[test]
fn playing_out_the_deck_ends_the_game() {
    let mut game = started_game(&["A", "B", "C"], 11);
    let mut drawn = HashSet::new();

    for turn in 0..DECK_SIZE {
        let outcome = game.draw().unwrap();
        assert_eq!(outcome.player_index, turn % 3);
        assert!(drawn.insert(outcome.card));

        let next = game.advance().unwrap();
        if turn + 1 < DECK_SIZE {
            assert_eq!(
                next,
                GameState::AwaitingDraw {
                    player: (turn + 1) % 3
                }
            );
        } else {
            assert_eq!(next, GameState::Ended);
        }
    }

    assert_eq!(drawn.len(), DECK_SIZE);
    assert!(game.is_ended());
    assert_eq!(game.active_player(), None);
    assert_eq!(game.draw().unwrap_err(), DrawError::InvalidTransition);
    assert_eq!(game.advance().unwrap_err(), AdvanceError::InvalidTransition);
}

#[test]
fn invalid_transitions_leave_state_unchanged() {
    let mut game = Game::new(GameOptions::default(), 5);
    assert_eq!(game.draw().unwrap_err(), DrawError::InvalidTransition);
    assert_eq!(game.advance().unwrap_err(), AdvanceError::InvalidTransition);
    assert_eq!(game.state(), GameState::NotStarted);

    game.start(roster(&["A", "B"])).unwrap();
    assert_eq!(game.advance().unwrap_err(), AdvanceError::InvalidTransition);
    assert_eq!(game.state(), GameState::AwaitingDraw { player: 0 });

    let outcome = game.draw().unwrap();
    assert_eq!(game.draw().unwrap_err(), DrawError::InvalidTransition);
    assert_eq!(game.current_card(), Some(outcome.card));
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn draw_from_empty_deck_is_rejected() {
    let mut game = started_game(&["A", "B"], 9);
    set_deck_from_draws(&mut game, &[]);

    assert_eq!(game.draw().unwrap_err(), DrawError::NoCards);
    assert_eq!(game.state(), GameState::AwaitingDraw { player: 0 });
}

#[test]
fn king_signal_fires_once() {
    let mut game = started_game(&["A", "B"], 13);
    set_deck_from_draws(
        &mut game,
        &[
            card(Rank::King, Suit::Spades),
            card(Rank::Four, Suit::Hearts),
            card(Rank::King, Suit::Diamonds),
        ],
    );

    let first = game.draw().unwrap();
    assert!(first.king);
    assert!(game.snapshot().king_drawn);

    game.advance().unwrap();
    assert!(!game.snapshot().king_drawn);

    let second = game.draw().unwrap();
    assert!(!second.king);
    assert!(!game.snapshot().king_drawn);

    game.advance().unwrap();
    assert!(game.draw().unwrap().king);
    assert_eq!(game.advance(), Ok(GameState::Ended));
}

#[test]
fn snapshot_reports_turn_and_rule() {
    let mut game = Game::new(GameOptions::default().with_locale(Locale::English), 17);

    let idle = game.snapshot();
    assert_eq!(idle.active_player, None);
    assert_eq!(idle.rule, "Draw a card to see its rule");
    assert!(!idle.ended);

    game.start(roster(&["Alice", "Bob"])).unwrap();
    set_deck_from_draws(&mut game, &[card(Rank::Ace, Suit::Clubs)]);
    game.draw().unwrap();

    let revealed = game.snapshot();
    assert_eq!(revealed.active_player, Some("Alice"));
    assert_eq!(revealed.current_card, Some(card(Rank::Ace, Suit::Clubs)));
    assert_eq!(revealed.rule, "The player gives 1 sip to another player.");
    assert_eq!(revealed.cards_remaining, 0);

    game.advance().unwrap();
    let ended = game.snapshot();
    assert!(ended.ended);
    assert_eq!(ended.active_player, None);
    assert_eq!(ended.current_card, None);
}

#[test]
fn restart_after_end_deals_a_fresh_deck() {
    let mut game = started_game(&["A", "B"], 19);
    set_deck_from_draws(&mut game, &[card(Rank::Two, Suit::Hearts)]);
    game.draw().unwrap();
    assert_eq!(game.advance(), Ok(GameState::Ended));

    game.restart().unwrap();
    assert_eq!(game.state(), GameState::AwaitingDraw { player: 0 });
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.active_player(), Some("A"));
}

#[test]
fn restart_mid_game_resets_turn() {
    let mut game = started_game(&["A", "B", "C"], 23);
    game.draw().unwrap();
    game.advance().unwrap();
    game.draw().unwrap();

    game.restart().unwrap();
    assert_eq!(game.state(), GameState::AwaitingDraw { player: 0 });
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn restart_without_players_fails() {
    let mut game = Game::new(GameOptions::default(), 29);

    assert!(matches!(
        game.restart(),
        Err(StartError::InsufficientPlayers { found: 0, .. })
    ));
    assert_eq!(game.state(), GameState::NotStarted);
}

#[test]
fn end_returns_home_and_keeps_roster() {
    let mut game = started_game(&["A", "B"], 31);
    game.draw().unwrap();

    game.end();
    assert_eq!(game.state(), GameState::NotStarted);
    assert_eq!(game.roster().len(), 2);

    game.restart().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn same_seed_same_deck_order() {
    let a = started_game(&["A", "B"], 37);
    let b = started_game(&["A", "B"], 37);
    let c = started_game(&["A", "B"], 38);

    assert_eq!(a.deck(), b.deck());
    assert_ne!(a.deck(), c.deck());
}

#[test]
fn restarts_reshuffle() {
    let mut game = started_game(&["A", "B"], 41);
    let first = game.deck().clone();

    game.restart().unwrap();
    assert_ne!(game.deck(), &first);
}

#[test]
fn roster_rejects_duplicates() {
    let mut roster = PlayerRoster::new();
    roster.add("Alice").unwrap();

    assert_eq!(
        roster.add("Alice").unwrap_err(),
        RosterError::DuplicatePlayerName
    );
    assert_eq!(
        PlayerRoster::from_names(["Bob", "Bob"]).unwrap_err(),
        RosterError::DuplicatePlayerName
    );
}

#[test]
fn ace_rule_depends_on_color() {
    let red = card(Rank::Ace, Suit::Hearts);
    let black = card(Rank::Ace, Suit::Clubs);

    assert_ne!(red.rule(Locale::French), black.rule(Locale::French));
    assert_eq!(red.rule(Locale::French), "Le joueur boit 1 gorgée.");
    assert_eq!(
        card(Rank::Ace, Suit::Diamonds).rule(Locale::French),
        red.rule(Locale::French)
    );
    assert_eq!(
        card(Rank::Ace, Suit::Spades).rule(Locale::French),
        rule_for(Rank::Ace, Color::Black, Locale::French)
    );
    assert_eq!(rule_text(Some(&red), Locale::French), red.rule(Locale::French));
}

#[test]
fn summary_mentions_both_colors() {
    assert!(rules_summary(Locale::French).contains("Rouges"));
    assert!(rules_summary(Locale::French).contains("Noires"));
    assert!(rules_summary(Locale::English).contains("(Black)"));
}
