use kotb::{Card, Game, GameOptions, GameState, Locale, PlayerRoster, rules};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    roster: PlayerRoster,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, locale: &str) -> Self {
        let options = GameOptions::default().with_locale(parse_locale(locale));
        let roster = PlayerRoster::with_max_name_len(options.max_name_len);
        Self {
            game: Game::new(options, seed as u64),
            roster,
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), JsValue> {
        self.roster.add(name).map_err(js_err)
    }

    pub fn remove_player(&mut self, name: &str) -> bool {
        self.roster.remove(name)
    }

    pub fn players(&self) -> Vec<String> {
        self.roster.names().to_vec()
    }

    pub fn can_start(&self) -> bool {
        self.roster.len() >= self.game.options().required_players()
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.game.start(self.roster.clone()).map_err(js_err)
    }

    /// Draws a card and returns whether it was a King.
    pub fn draw(&mut self) -> Result<bool, JsValue> {
        self.game
            .draw()
            .map(|outcome| outcome.king)
            .map_err(js_err)
    }

    pub fn advance(&mut self) -> Result<(), JsValue> {
        self.game.advance().map(|_| ()).map_err(js_err)
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.game.restart().map_err(js_err)
    }

    pub fn go_home(&mut self) {
        self.game.end();
    }

    pub fn card_rule(&self, symbol: &str, suit: &str) -> String {
        rules::rule_for_symbol(symbol, suit, self.game.options().locale).into()
    }

    pub fn rules_summary(&self) -> String {
        rules::rules_summary(self.game.options().locale).into()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = self.game.snapshot();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            active_player: view.active_player,
            current_card: view.current_card.map(card_to_js),
            rule: view.rule,
            cards_remaining: view.cards_remaining as u32,
            ended: view.ended,
            king_drawn: view.king_drawn,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    state: &'static str,
    active_player: Option<&'a str>,
    current_card: Option<JsCard>,
    rule: &'static str,
    cards_remaining: u32,
    ended: bool,
    king_drawn: bool,
}

#[derive(Serialize)]
struct JsCard {
    symbol: &'static str,
    suit: &'static str,
    is_red: bool,
    image: String,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        symbol: card.rank.symbol(),
        suit: card.suit.name(),
        is_red: card.is_red(),
        image: card.image_name(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::AwaitingDraw { .. } => "AwaitingDraw",
        GameState::CardRevealed { .. } => "CardRevealed",
        GameState::Ended => "Ended",
    }
}

fn parse_locale(locale: &str) -> Locale {
    match locale {
        "en" => Locale::English,
        _ => Locale::French,
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
