//! End-to-end tests for the game engine
//!
//! Drives whole games through the library API with legal 64-card decks,
//! covering the rescue paths, the catastrophe rules, and lost detection.

use castaway_rs::core::{CardKind, ItemKind, ALL_CARDS};
use castaway_rs::game::{BuildOutcome, GameState, Phase, RollOutcome};
use castaway_rs::loader::{parse_deck, Deck};
use castaway_rs::LogicError;

use CardKind::{Metal, Plastic, Wood};

/// Legal deck starting with the given cards, filled up in catalogue order.
fn deck_with_prefix(prefix: &[CardKind]) -> Deck {
    let mut cards: Vec<CardKind> = prefix.to_vec();
    for kind in ALL_CARDS {
        let used = prefix.iter().filter(|&&c| c == kind).count();
        for _ in 0..kind.deck_count() - used {
            cards.push(kind);
        }
    }
    let tokens: Vec<&str> = cards.iter().map(|c| c.token()).collect();
    parse_deck(&tokens.join(",")).expect("prefix must leave the deck legal")
}

fn started_game(prefix: &[CardKind]) -> GameState {
    let mut game = GameState::new();
    game.start(deck_with_prefix(prefix)).unwrap();
    game
}

fn draw_n(game: &mut GameState, count: usize) {
    for _ in 0..count {
        game.draw().unwrap();
    }
}

#[test]
fn test_balloon_rescue_wins_outright() {
    // Fireplace cost first, then the balloon cost.
    let mut game = started_game(&[
        Wood, Wood, Wood, Metal, // fireplace
        Wood, Plastic, Plastic, Plastic, Plastic, Plastic, Plastic, // balloon
    ]);
    draw_n(&mut game, 4);
    assert_eq!(game.build(ItemKind::Fireplace), Ok(BuildOutcome::Ok));
    draw_n(&mut game, 7);
    assert_eq!(game.build(ItemKind::Balloon), Ok(BuildOutcome::Win));
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.cards_left(), None);
    assert_eq!(game.draw(), Err(LogicError::NoActiveGame));
}

#[test]
fn test_balloon_without_fireplace_is_not_buildable() {
    let mut game = started_game(&[
        Wood, Plastic, Plastic, Plastic, Plastic, Plastic, Plastic,
    ]);
    draw_n(&mut game, 7);
    assert_eq!(
        game.build(ItemKind::Balloon),
        Err(LogicError::NotEnoughResources)
    );
    assert!(!game
        .buildable_items()
        .unwrap()
        .contains(&ItemKind::Balloon));
}

#[test]
fn test_catastrophe_without_shack_clears_hand() {
    let mut game = started_game(&[Wood, Metal, Plastic, CardKind::Thunderstorm]);
    draw_n(&mut game, 3);
    assert_eq!(game.draw(), Ok(CardKind::Thunderstorm));
    assert_eq!(game.resources().unwrap().count(), 0);
    assert_eq!(game.phase(), Phase::Scavenge);
}

#[test]
fn test_catastrophe_with_shack_keeps_five() {
    let mut game = started_game(&[
        Wood, Wood, Metal, Plastic, Plastic, // shack
        Wood, Metal, Plastic, Wood, Metal, Plastic, Wood, // r1..r7
        CardKind::Thunderstorm,
    ]);
    draw_n(&mut game, 5);
    game.build(ItemKind::Shack).unwrap();
    draw_n(&mut game, 7);
    assert_eq!(game.draw(), Ok(CardKind::Thunderstorm));
    // r3..r7 survive, in draw order.
    let hand: Vec<CardKind> = game.resources().unwrap().collect();
    assert_eq!(hand, vec![Plastic, Wood, Metal, Plastic, Wood]);
}

#[test]
fn test_encounter_with_and_without_axe() {
    // With the axe: 1 + 2 beats the spider's 2.
    let mut game = started_game(&[Metal, Metal, Metal, Wood, CardKind::Spider]);
    draw_n(&mut game, 3);
    game.build(ItemKind::Axe).unwrap();
    draw_n(&mut game, 2);
    assert_eq!(game.phase(), Phase::Encounter { card: CardKind::Spider });
    assert_eq!(game.roll(4, 1), Ok(RollOutcome::Survived));
    let hand: Vec<CardKind> = game.resources().unwrap().collect();
    assert_eq!(hand, vec![Wood]);

    // Without the axe the same roll loses and the hand is swept.
    let mut game = started_game(&[Wood, CardKind::Spider]);
    draw_n(&mut game, 2);
    assert_eq!(game.roll(4, 1), Ok(RollOutcome::Lose));
    assert_eq!(game.phase(), Phase::Scavenge);
    assert_eq!(game.resources().unwrap().count(), 0);
}

#[test]
fn test_sailing_raft_endeavor() {
    let raft_cost = [Wood, Wood, Wood, Wood, Metal, Metal, Plastic, Plastic];
    let mut game = started_game(&raft_cost);
    draw_n(&mut game, 8);
    game.build(ItemKind::SailingRaft).unwrap();
    assert_eq!(game.roll(6, 3), Ok(RollOutcome::Lose));
    assert_eq!(game.phase(), Phase::Scavenge);

    let mut game = started_game(&raft_cost);
    draw_n(&mut game, 8);
    game.build(ItemKind::SailingRaft).unwrap();
    assert_eq!(game.roll(6, 4), Ok(RollOutcome::Win));
    assert_eq!(game.phase(), Phase::Won);
}

#[test]
fn test_dead_end_deck_is_lost() {
    // Catalogue order: all 48 resources, then the animals, then the storm.
    let mut game = started_game(&[]);
    draw_n(&mut game, 48);

    // Survive every animal with the highest face.
    for (count, size) in [(5, 4), (5, 6), (5, 8)] {
        for _ in 0..count {
            game.draw().unwrap();
            assert_eq!(game.roll(size, size), Ok(RollOutcome::Survived));
        }
    }

    // The last card is the thunderstorm: it sweeps the 48-card hand, the
    // pile is spent, and nothing is buildable anymore.
    assert!(!game.is_lost());
    assert_eq!(game.draw(), Ok(CardKind::Thunderstorm));
    assert!(game.is_lost());
    assert_eq!(game.phase(), Phase::Lost);
    assert_eq!(game.cards_left(), None);
    assert_eq!(game.reset(), Ok(()));
    assert_eq!(game.phase(), Phase::Scavenge);
}

#[test]
fn test_start_during_active_game_is_rejected() {
    let mut game = started_game(&[]);
    assert_eq!(
        game.start(deck_with_prefix(&[])),
        Err(LogicError::ActiveGame)
    );
    assert_eq!(game.phase(), Phase::Scavenge);
    assert_eq!(game.cards_left(), Some(64));
}

#[test]
fn test_hand_only_ever_holds_resources() {
    let mut game = started_game(&[]);
    draw_n(&mut game, 48);
    for (count, size) in [(5, 4), (5, 6), (5, 8)] {
        for _ in 0..count {
            game.draw().unwrap();
            game.roll(size, size).unwrap();
            assert!(game.resources().unwrap().all(|card| card.is_resource()));
        }
    }
}

#[test]
fn test_inventory_has_no_duplicates_across_a_game() {
    let mut game = started_game(&[
        Metal, Metal, Metal, Wood, Wood, Wood, Wood, Wood, Metal, Plastic, Plastic,
    ]);
    draw_n(&mut game, 11);
    game.build(ItemKind::Axe).unwrap();
    game.build(ItemKind::Club).unwrap();
    game.build(ItemKind::Shack).unwrap();
    let inventory = game.inventory();
    let mut unique: Vec<ItemKind> = inventory.to_vec();
    unique.dedup();
    assert_eq!(inventory.len(), unique.len());
    assert_eq!(inventory, &[ItemKind::Axe, ItemKind::Club, ItemKind::Shack]);
}
