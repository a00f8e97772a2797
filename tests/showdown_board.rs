use headsup_holdem::betting::{Action, Phase};
use headsup_holdem::config::TableConfig;
use headsup_holdem::game::Game;

#[test]
fn fold_deals_remaining_board_cards_and_shows_both_hands() {
    let mut game = Game::new(TableConfig::default().with_seed(12)).unwrap();
    assert!(game.snapshot().computer_hole.is_none());
    game.apply_action(Action::Fold).unwrap();

    let s = game.snapshot();
    assert_eq!(s.phase, Phase::RoundOver);
    assert_eq!(s.community.len(), 5);
    assert!(s.computer_hole.is_some());
    assert!(s.user_category.is_some());
    assert!(s.computer_category.is_some());
    assert_eq!(game.deck().drawn(), 9);
}
