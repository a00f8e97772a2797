use headsup_holdem::cards::{parse_cards, Card, Rank};
use headsup_holdem::evaluator::{evaluate, evaluate_five, HandCategory};

fn five(s: &str) -> [Card; 5] {
    parse_cards(s).unwrap().try_into().unwrap()
}

fn seven(s: &str) -> [Card; 7] {
    parse_cards(s).unwrap().try_into().unwrap()
}

#[test]
fn five_card_categories() {
    let cases = [
        ("As Ks Qs Js Ts", HandCategory::RoyalFlush),
        ("9s 8s 7s 6s 5s", HandCategory::StraightFlush),
        ("9c 9d 9h 9s Ac", HandCategory::FourOfAKind),
        ("Qc Qd Qh 3s 3c", HandCategory::FullHouse),
        ("Ah Jh 8h 4h 2h", HandCategory::Flush),
        ("9c Td Jh Qs Kc", HandCategory::Straight),
        ("7c 7d 7h Ks 2c", HandCategory::ThreeOfAKind),
        ("Jc Jd 4h 4s 9c", HandCategory::TwoPair),
        ("Tc Td 8h 4s 2c", HandCategory::OnePair),
        ("Ah Jd 8s 5c 3d", HandCategory::HighCardOnly),
    ];
    for (hand, want) in cases {
        assert_eq!(evaluate_five(&five(hand)).category, want, "{hand}");
    }
}

#[test]
fn royal_flush_from_seven() {
    let e = evaluate(&seven("Ts Js Qs Ks As 2h 3d"));
    assert_eq!(e.category, HandCategory::RoyalFlush);
    assert!(e.best_five.iter().all(|c| c.rank() >= Rank::Ten));
}

#[test]
fn full_house_from_seven() {
    let e = evaluate(&seven("2c 2d 2h 5s 5d 9c Kh"));
    assert_eq!(e.category, HandCategory::FullHouse);
}

#[test]
fn wheel_from_seven() {
    let e = evaluate(&seven("As 2d 3h 4c 5s 9d Kh"));
    assert_eq!(e.category, HandCategory::Straight);
    assert_eq!(e.high_card(), Rank::Ace, "high card counts all seven cards");
}

#[test]
fn flush_beats_straight_in_the_same_seven() {
    let e = evaluate(&seven("4h 5d 6h 7h 8c Kh 2h"));
    assert_eq!(e.category, HandCategory::Flush);
}

#[test]
fn labels_match_display_names() {
    assert_eq!(HandCategory::TwoPair.to_string(), "Two Pairs");
    assert_eq!(HandCategory::HighCardOnly.to_string(), "No Pair");
    assert_eq!(HandCategory::RoyalFlush.label(), "Royal Flush");
}
