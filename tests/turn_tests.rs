//! Turn flow tests.
//!
//! These tests drive whole turns through the public API:
//! - Drawing, reshuffling and refreshing the hand
//! - Shop purchases and shop abilities
//! - Abilities that reach into another player's hand

use rust_deckbattler::abilities::{Ability, AbilityOutcome, AbilityPool};
use rust_deckbattler::cards::{CardDefinition, CardId, CardRegistry, Faction};
use rust_deckbattler::core::{EntityId, GameRng, GameState, KeepOrder, PlayerId, TableConfig};
use rust_deckbattler::decision::{FirstChoice, ScriptedDecisions};
use rust_deckbattler::error::GameError;
use rust_deckbattler::turn::{PurchaseOutcome, TurnContext};
use rust_deckbattler::zones::Zone;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

const SCOUT: CardId = CardId::new(1);
const VIPER: CardId = CardId::new(2);
const CUTTER: CardId = CardId::new(3);
const RAIDER: CardId = CardId::new(4);
const TRADER: CardId = CardId::new(5);
const DEPOT: CardId = CardId::new(6);

fn registry() -> CardRegistry {
    [
        CardDefinition::ship(SCOUT, "Scout", 0, Faction::Neutral)
            .with_on_play(AbilityPool::all([Ability::PoolMoney(1)])),
        CardDefinition::ship(VIPER, "Viper", 0, Faction::Neutral)
            .with_on_play(AbilityPool::all([Ability::PoolDamage(1)])),
        CardDefinition::ship(CUTTER, "Cutter", 2, Faction::Federation).with_on_play(
            AbilityPool::all([Ability::PoolMoney(2), Ability::PoolHeal(4)]),
        ),
        CardDefinition::ship(RAIDER, "Raider", 3, Faction::Slime)
            .with_on_play(AbilityPool::all([Ability::OpponentDiscardCard])),
        CardDefinition::ship(TRADER, "Trader", 3, Faction::Techno).with_on_play(
            AbilityPool::one_of([Ability::ShopBuy { max_price: 2 }, Ability::ShopScrap]),
        ),
        CardDefinition::station(DEPOT, "Depot", 4, Faction::Techno, 4),
    ]
    .into_iter()
    .collect()
}

fn table() -> GameState {
    GameState::new(2, TableConfig::default(), registry()).with_shuffler(KeepOrder)
}

fn sorted(mut cards: Vec<EntityId>) -> Vec<EntityId> {
    cards.sort();
    cards
}

// ============================================================================
// Drawing and reshuffling
// ============================================================================

/// Test that a refreshed hand is full whenever draw + discard hold enough.
#[test]
fn test_refresh_hand_fills_from_both_piles() {
    let mut state = table();
    state.add_deck(P0, vec![SCOUT; 2]).unwrap();
    for _ in 0..4 {
        state.add_card(VIPER, Zone::DiscardPile(P0)).unwrap();
    }

    state.refresh_hand(P0).unwrap();

    assert_eq!(state.zones().zone_size(Zone::Hand(P0)), 5);
    assert_eq!(state.zones().zone_size(Zone::DrawPile(P0)), 1);
    assert!(state.zones().is_empty(Zone::DiscardPile(P0)));
    assert!(state.check_zone_integrity());
}

/// Test that the old hand is available to the reshuffle of the same refresh.
#[test]
fn test_refresh_hand_recycles_old_hand() {
    let mut state = table();
    let hand: Vec<_> = (0..5)
        .map(|_| state.add_card(SCOUT, Zone::Hand(P0)).unwrap())
        .collect();

    state.refresh_hand(P0).unwrap();

    assert_eq!(sorted(state.zones().cards_vec(Zone::Hand(P0))), hand);
}

/// Test that reshuffling then draining yields the old discard pile's cards.
#[test]
fn test_reshuffle_preserves_multiset() {
    let mut state = GameState::new(2, TableConfig::default(), registry())
        .with_shuffler(GameRng::new(7));
    let discarded: Vec<_> = [SCOUT, VIPER, CUTTER, RAIDER, DEPOT, VIPER]
        .into_iter()
        .map(|card| state.add_card(card, Zone::DiscardPile(P0)).unwrap())
        .collect();

    state.reshuffle_discard_into_draw(P0).unwrap();
    let mut drained = Vec::new();
    while let Ok(card) = state.draw_to_hand(P0) {
        drained.push(card);
        assert!(state.check_zone_integrity());
    }

    assert_eq!(sorted(drained), sorted(discarded.clone()));
    assert_eq!(sorted(state.zones().cards_vec(Zone::Hand(P0))), sorted(discarded));
}

/// Test that editing a copy of the zone view leaves the table's cards placed.
#[test]
fn test_zone_view_cannot_orphan_cards() {
    let mut state = table();
    let deck = state.add_deck(P0, [SCOUT, SCOUT]).unwrap();

    let mut scratch = state.zones().clone();
    assert_eq!(scratch.draw(Zone::DrawPile(P0)), Ok(deck[1]));
    scratch.put(EntityId(999), Zone::Hand(P0));

    assert_eq!(state.zones().zone_of(deck[1]), Some(Zone::DrawPile(P0)));
    assert!(!state.zones().contains(EntityId(999)));
    assert!(state.check_zone_integrity());
}

/// Test that a seeded shuffle is reproducible across tables.
#[test]
fn test_seeded_reshuffle_is_deterministic() {
    let order = |seed: u64| {
        let mut state = GameState::new(1, TableConfig::default().with_seed(seed), registry());
        for _ in 0..10 {
            state.add_card(SCOUT, Zone::DiscardPile(P0)).unwrap();
        }
        state.reshuffle_discard_into_draw(P0).unwrap();
        state.zones().cards_vec(Zone::DrawPile(P0))
    };

    assert_eq!(order(11), order(11));
}

/// Test that drawing with both piles empty is reported, not recovered.
#[test]
fn test_no_cards_available() {
    let mut state = table();
    state.add_card(SCOUT, Zone::Hand(P0)).unwrap();

    assert_eq!(
        state.draw_to_hand(P0),
        Err(GameError::NoCardsAvailable { player: P0 })
    );
}

// ============================================================================
// Full turn
// ============================================================================

/// Test play, buy, attack and discard in sequence.
#[test]
fn test_full_turn() {
    let mut state = table();
    state
        .add_deck(
            P0,
            [SCOUT, SCOUT, SCOUT, SCOUT, SCOUT, VIPER, CUTTER, SCOUT, VIPER, VIPER],
        )
        .unwrap();
    let supply = state.stock_shop([DEPOT, RAIDER]).unwrap();
    state.refresh_hand(P0).unwrap();

    let mut ctx = TurnContext::new(&mut state, P0).unwrap();
    ctx.play_hand(&mut FirstChoice).unwrap();
    // Hand was VIPER, VIPER, SCOUT, CUTTER, VIPER.
    assert_eq!(ctx.pool.damage, 3);
    assert_eq!(ctx.pool.currency, 3);
    assert_eq!(ctx.pool.heal, 4);

    let bought = ctx
        .buy_card(&mut ScriptedDecisions::new().card(supply[1]))
        .unwrap();
    assert_eq!(bought, PurchaseOutcome::Bought(supply[1]));

    ctx.attack(&mut FirstChoice).unwrap();
    ctx.discard_phase().unwrap();

    assert_eq!(state.health(P1), Ok(47));
    assert_eq!(state.health(P0), Ok(54));
    assert_eq!(state.zones().zone_size(Zone::Hand(P0)), 5);
    assert!(state.zones().is_in_zone(supply[1], Zone::DiscardPile(P0)));
    // Played ships are consumed.
    assert_eq!(state.card_count(), 7);
    assert!(state.check_zone_integrity());
}

// ============================================================================
// Shop
// ============================================================================

/// Test buying a card priced 3 with 5 currency.
#[test]
fn test_buy_replenishes_display() {
    let mut state = table();
    let supply = state.stock_shop([SCOUT, VIPER, RAIDER, CUTTER, SCOUT, VIPER]).unwrap();
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();
    ctx.pool.currency = 5;

    let outcome = ctx
        .buy_card(&mut ScriptedDecisions::new().card(supply[2]))
        .unwrap();

    assert_eq!(outcome, PurchaseOutcome::Bought(supply[2]));
    assert_eq!(ctx.pool.currency, 5);
    assert!(ctx.state.zones().is_in_zone(supply[2], Zone::DiscardPile(P0)));
    assert_eq!(ctx.state.zones().zone_size(Zone::ShopDisplay), 5);
    assert!(ctx.state.zones().is_in_zone(supply[0], Zone::ShopDisplay));
    assert!(ctx.state.zones().is_empty(Zone::ShopSupply));
}

/// Test that a buy ability above its price ceiling leaves the shop alone.
#[test]
fn test_buy_ability_price_exceeded() {
    let mut state = table();
    let supply = state.stock_shop([SCOUT, RAIDER]).unwrap();
    let display_before = state.zones().cards_vec(Zone::ShopDisplay);
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    let result = Ability::ShopBuy { max_price: 2 }
        .apply(&mut ctx, &mut ScriptedDecisions::new().card(supply[1]));

    assert_eq!(result, Err(GameError::PriceExceeded { cost: 3, max_price: 2 }));
    assert_eq!(ctx.state.zones().cards_vec(Zone::ShopDisplay), display_before);
    assert!(ctx.state.zones().is_empty(Zone::DiscardPile(P0)));
}

/// Test that a choice pool can pick the scrap ability and scrap from the shop.
#[test]
fn test_trader_scraps_from_shop() {
    let mut state = table();
    let trader = state.add_card(TRADER, Zone::Hand(P0)).unwrap();
    let supply = state.stock_shop([SCOUT, VIPER, CUTTER, RAIDER, DEPOT, SCOUT]).unwrap();
    let mut script = ScriptedDecisions::new().ability(1).card(supply[3]);
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    ctx.play_hand(&mut script).unwrap();

    assert!(!ctx.state.zones().contains(trader));
    assert!(ctx.state.instance(supply[3]).is_none());
    assert_eq!(ctx.state.zones().zone_size(Zone::ShopDisplay), 5);
    assert_eq!(script.prompts(), &["Use \"Scrap a card in the shop\"?".to_string()]);
    assert!(ctx.state.check_zone_integrity());
}

/// Test that declining an optional shop ability changes nothing.
#[test]
fn test_declined_shop_scrap() {
    let mut state = table();
    state.stock_shop([SCOUT, VIPER]).unwrap();
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    let outcome = Ability::ShopScrap
        .apply(&mut ctx, &mut ScriptedDecisions::new().confirm(false))
        .unwrap();

    assert_eq!(outcome, AbilityOutcome::Declined);
    assert_eq!(ctx.state.zones().zone_size(Zone::ShopDisplay), 2);
    assert_eq!(ctx.state.card_count(), 2);
}

// ============================================================================
// Cross-player abilities
// ============================================================================

/// Test that the opponent discards a card of their own choosing.
#[test]
fn test_raider_forces_discard() {
    let mut state = table();
    state.add_card(RAIDER, Zone::Hand(P0)).unwrap();
    let kept = state.add_card(SCOUT, Zone::Hand(P1)).unwrap();
    let lost = state.add_card(DEPOT, Zone::Hand(P1)).unwrap();
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    ctx.play_hand(&mut ScriptedDecisions::new().opponent(P1).card(lost))
        .unwrap();

    assert!(state.zones().is_in_zone(kept, Zone::Hand(P1)));
    assert!(state.zones().is_in_zone(lost, Zone::DiscardPile(P1)));
    assert!(state.check_zone_integrity());
}

/// Test that forcing a discard from an empty hand is skipped.
#[test]
fn test_forced_discard_against_empty_hand() {
    let mut state = table();
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    let outcome = Ability::OpponentDiscardCard
        .apply(&mut ctx, &mut FirstChoice)
        .unwrap();

    assert_eq!(outcome, AbilityOutcome::Skipped);
}

/// Test drawing a card and discarding another.
#[test]
fn test_draw_then_discard() {
    let mut state = table();
    let held = state.add_card(DEPOT, Zone::Hand(P0)).unwrap();
    let drawn = state.add_card(CUTTER, Zone::DrawPile(P0)).unwrap();
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    Ability::DrawThenDiscard
        .apply(&mut ctx, &mut ScriptedDecisions::new().card(held))
        .unwrap();

    assert!(state.zones().is_in_zone(drawn, Zone::Hand(P0)));
    assert!(state.zones().is_in_zone(held, Zone::DiscardPile(P0)));
}

/// Test that a provider answering outside the candidates is rejected.
#[test]
fn test_selection_out_of_range() {
    let mut state = table();
    state.add_card(SCOUT, Zone::Hand(P1)).unwrap();
    let mut ctx = TurnContext::new(&mut state, P0).unwrap();

    let result = Ability::OpponentDiscardCard
        .apply(&mut ctx, &mut ScriptedDecisions::new().opponent(PlayerId::new(5)));

    assert_eq!(
        result,
        Err(GameError::SelectionOutOfRange { what: "opponent", len: 1 })
    );
}
