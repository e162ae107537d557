//! Rule lookup for drawn cards.
//!
//! Every card maps to a fixed instruction. Aces and 2 through 5 depend on the
//! colour of the card: red cards are drunk by the player who drew them, black
//! cards are handed out to the others. Everything from 6 up reads the same in
//! both colours.

use crate::card::{Card, Color, Rank, Suit};
use crate::options::Locale;

/// Returns the rule for a rank and colour class.
#[must_use]
pub const fn rule_for(rank: Rank, color: Color, locale: Locale) -> &'static str {
    match locale {
        Locale::French => french(rank, color),
        Locale::English => english(rank, color),
    }
}

/// Returns the rule for a drawn card, or the draw prompt when there is none.
#[must_use]
pub const fn rule_text(card: Option<&Card>, locale: Locale) -> &'static str {
    match card {
        Some(card) => card.rule(locale),
        None => draw_prompt(locale),
    }
}

/// Returns the rule for a textual symbol and suit name, as sent by a UI.
///
/// Anything outside the 52-card domain resolves to [`unknown_rule`].
#[must_use]
pub fn rule_for_symbol(symbol: &str, suit: &str, locale: Locale) -> &'static str {
    match (Rank::from_symbol(symbol), Suit::from_name(suit)) {
        (Some(rank), Some(suit)) => rule_for(rank, suit.color(), locale),
        _ => unknown_rule(locale),
    }
}

/// Prompt shown before the first card has been drawn.
#[must_use]
pub const fn draw_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::French => "Tirez une carte pour voir la règle",
        Locale::English => "Draw a card to see its rule",
    }
}

/// Fallback for symbols that are not part of the deck.
#[must_use]
pub const fn unknown_rule(locale: Locale) -> &'static str {
    match locale {
        Locale::French => "Règle inconnue",
        Locale::English => "Rule unknown",
    }
}

/// Returns the full rules sheet shown before a game starts.
#[must_use]
pub const fn rules_summary(locale: Locale) -> &'static str {
    match locale {
        Locale::French => FRENCH_SUMMARY,
        Locale::English => ENGLISH_SUMMARY,
    }
}

const fn french(rank: Rank, color: Color) -> &'static str {
    match (rank, color) {
        (Rank::Ace, Color::Red) => "Le joueur boit 1 gorgée.",
        (Rank::Ace, Color::Black) => "Le joueur distribue 1 gorgée à un autre joueur.",
        (Rank::Two, Color::Red) => "Le joueur boit 2 gorgées.",
        (Rank::Two, Color::Black) => {
            "Le joueur distribue 2 gorgées à d'autres joueurs (il ne boit pas lui-même)."
        }
        (Rank::Three, Color::Red) => "Le joueur boit 3 gorgées.",
        (Rank::Three, Color::Black) => {
            "Le joueur distribue 3 gorgées à d'autres joueurs (il ne boit pas lui-même)."
        }
        (Rank::Four, Color::Red) => "Le joueur boit 4 gorgées.",
        (Rank::Four, Color::Black) => {
            "Le joueur distribue 4 gorgées à d'autres joueurs (il ne boit pas lui-même)."
        }
        (Rank::Five, Color::Red) => "Le joueur boit 5 gorgées.",
        (Rank::Five, Color::Black) => {
            "Le joueur distribue 5 gorgées à d'autres joueurs (il ne boit pas lui-même)."
        }
        (Rank::Six, _) => {
            "Le joueur peut ajouter une nouvelle règle temporaire (valable jusqu'à ce qu'un autre \
             joueur tire un 6), ou il peut supprimer une règle existante."
        }
        (Rank::Seven, _) => {
            "Le joueur lance le jeu \"Dans ma valise\". À tour de rôle, chaque joueur ajoute un \
             élément à la valise. Option spéciale : Le joueur peut dire \"Répète\" pour défier le \
             dernier joueur. Si le dernier joueur réussit, celui qui a dit \"Répète\" boit le \
             double. Si le dernier joueur échoue, il boit une gorgée."
        }
        (Rank::Eight, _) => {
            "Le joueur doit dire une chose qu'il a déjà faite mais que les autres n'ont jamais \
             faite. Ceux qui n'ont jamais fait cette chose boivent une gorgée. Si tout le monde \
             l'a déjà fait, le joueur boit autant de gorgées que le nombre de joueurs."
        }
        (Rank::Nine, _) => {
            "Le joueur dit une chose qu'il n'a jamais faite, mais que les autres ont peut-être \
             déjà faite. Ceux qui l'ont déjà faite boivent une gorgée. Si personne ne l'a faite, \
             le joueur boit autant de gorgées que le nombre de joueurs."
        }
        (Rank::Ten, _) => {
            "Le joueur choisit un thème (films, couleurs, pays, etc.). Chaque joueur doit nommer \
             un élément du thème. Celui qui échoue boit une gorgée."
        }
        (Rank::Jack, _) => "Tous les hommes boivent une gorgée.",
        (Rank::Queen, _) => "Toutes les femmes boivent une gorgée.",
        (Rank::King, _) => {
            "Le joueur devient le Roi de la table. Il peut placer son poing sous son menton à \
             tout moment. Les autres doivent suivre. Le dernier à le faire boit une gorgée."
        }
    }
}

const fn english(rank: Rank, color: Color) -> &'static str {
    match (rank, color) {
        (Rank::Ace, Color::Red) => "The player drinks 1 sip.",
        (Rank::Ace, Color::Black) => "The player gives 1 sip to another player.",
        (Rank::Two, Color::Red) => "The player drinks 2 sips.",
        (Rank::Two, Color::Black) => {
            "The player gives out 2 sips to other players (they do not drink themselves)."
        }
        (Rank::Three, Color::Red) => "The player drinks 3 sips.",
        (Rank::Three, Color::Black) => {
            "The player gives out 3 sips to other players (they do not drink themselves)."
        }
        (Rank::Four, Color::Red) => "The player drinks 4 sips.",
        (Rank::Four, Color::Black) => {
            "The player gives out 4 sips to other players (they do not drink themselves)."
        }
        (Rank::Five, Color::Red) => "The player drinks 5 sips.",
        (Rank::Five, Color::Black) => {
            "The player gives out 5 sips to other players (they do not drink themselves)."
        }
        (Rank::Six, _) => {
            "The player may add a new temporary rule (valid until someone else draws a 6), or \
             remove an existing one."
        }
        (Rank::Seven, _) => {
            "The player starts \"In my suitcase\". In turn, each player adds an item to the \
             suitcase. Special option: a player may say \"Repeat\" to challenge the last player. \
             If the last player succeeds, whoever said \"Repeat\" drinks double. If the last \
             player fails, they drink one sip."
        }
        (Rank::Eight, _) => {
            "The player names something they have done that nobody else has. Those who never did \
             it drink one sip. If everyone has already done it, the player drinks as many sips as \
             there are players."
        }
        (Rank::Nine, _) => {
            "The player names something they have never done but others might have. Those who \
             did it drink one sip. If nobody did it, the player drinks as many sips as there are \
             players."
        }
        (Rank::Ten, _) => {
            "The player picks a theme (films, colours, countries, etc.). Each player must name \
             something from the theme. Whoever fails drinks one sip."
        }
        (Rank::Jack, _) => "All the men drink one sip.",
        (Rank::Queen, _) => "All the women drink one sip.",
        (Rank::King, _) => {
            "The player becomes King of the table. They may put their fist under their chin at \
             any time. Everyone must follow. The last one to do it drinks one sip."
        }
    }
}

const FRENCH_SUMMARY: &str = "Règles des cartes :

Cartes Cœur et Carreau (Rouges)
Cartes numérotées de 1 à 5 : Le joueur boit le nombre de gorgées indiqué.
Carte 6 : Le joueur peut ajouter une nouvelle règle temporaire (valable jusqu'à ce qu'un autre joueur tire un 6). Ou, il peut supprimer une règle existante.
Carte 7 : Le joueur lance le jeu \"Dans ma valise\". À tour de rôle, chaque joueur ajoute un élément à la valise. Option spéciale : Le joueur peut dire \"Répète\" pour défier le dernier joueur. Si le dernier joueur réussit, celui qui a dit \"Répète\" boit le double. Si le dernier joueur échoue, il boit une gorgée.
Carte 8 : Le joueur doit dire une chose qu'il a déjà faite mais que les autres n'ont jamais faite. Ceux qui n'ont jamais fait cette chose boivent une gorgée. Si tout le monde l'a déjà fait, le joueur boit autant de gorgées que le nombre de joueurs.
Carte 9 : Le joueur dit une chose qu'il n'a jamais faite, mais que les autres ont peut-être déjà faite. Ceux qui l'ont déjà faite boivent une gorgée. Si personne ne l'a faite, le joueur boit autant de gorgées que le nombre de joueurs.
Carte 10 : Le joueur choisit un thème (films, couleurs, pays, etc.). Chaque joueur doit nommer un élément du thème. Celui qui échoue boit une gorgée.

Cartes Trèfle et Pique (Noires)
Cartes numérotées de 1 à 5 : Le joueur distribue le nombre de gorgées indiqué à d'autres joueurs (il ne boit pas lui-même).
Les cartes de 6 à 10 suivent les mêmes règles que les cartes rouges.

Cartes Figures (Valet, Dame, Roi)
Valet (toutes couleurs) : Tous les hommes boivent une gorgée.
Dame (toutes couleurs) : Toutes les femmes boivent une gorgée.
Roi (toutes couleurs) : Le joueur devient le Roi de la table. Il peut placer son poing sous son menton à tout moment. Les autres doivent suivre. Le dernier à le faire boit une gorgée.";

const ENGLISH_SUMMARY: &str = "Card rules:

Hearts and Diamonds (Red)
Cards 1 to 5: the player drinks the number of sips shown.
Card 6: the player may add a new temporary rule (valid until someone else draws a 6), or remove an existing one.
Card 7: the player starts \"In my suitcase\". In turn, each player adds an item to the suitcase. Special option: a player may say \"Repeat\" to challenge the last player. If the last player succeeds, whoever said \"Repeat\" drinks double. If the last player fails, they drink one sip.
Card 8: the player names something they have done that nobody else has. Those who never did it drink one sip. If everyone has already done it, the player drinks as many sips as there are players.
Card 9: the player names something they have never done but others might have. Those who did it drink one sip. If nobody did it, the player drinks as many sips as there are players.
Card 10: the player picks a theme (films, colours, countries, etc.). Each player must name something from the theme. Whoever fails drinks one sip.

Clubs and Spades (Black)
Cards 1 to 5: the player gives out the number of sips shown to other players (they do not drink themselves).
Cards 6 to 10 follow the same rules as red cards.

Face cards (Jack, Queen, King)
Jack (any colour): all the men drink one sip.
Queen (any colour): all the women drink one sip.
King (any colour): the player becomes King of the table. They may put their fist under their chin at any time. Everyone must follow. The last one to do it drinks one sip.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_ranks_differ_by_color_only() {
        for locale in [Locale::French, Locale::English] {
            for rank in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
                assert_ne!(
                    rule_for(rank, Color::Red, locale),
                    rule_for(rank, Color::Black, locale)
                );
            }
            for rank in &Rank::ALL[5..] {
                assert_eq!(
                    rule_for(*rank, Color::Red, locale),
                    rule_for(*rank, Color::Black, locale)
                );
            }
        }
    }

    #[test]
    fn every_rule_is_non_empty() {
        for locale in [Locale::French, Locale::English] {
            for rank in Rank::ALL {
                for color in [Color::Red, Color::Black] {
                    assert!(!rule_for(rank, color, locale).is_empty());
                }
            }
        }
    }

    #[test]
    fn missing_card_yields_draw_prompt() {
        assert_eq!(rule_text(None, Locale::French), draw_prompt(Locale::French));
        assert_eq!(rule_text(None, Locale::English), "Draw a card to see its rule");
    }

    #[test]
    fn unknown_symbols_fall_back() {
        assert_eq!(rule_for_symbol("Z", "hearts", Locale::English), "Rule unknown");
        assert_eq!(rule_for_symbol("A", "stars", Locale::French), "Règle inconnue");
        assert_eq!(
            rule_for_symbol("3", "clubs", Locale::French),
            rule_for(Rank::Three, Color::Black, Locale::French)
        );
    }
}
