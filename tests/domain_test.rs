//! Интеграционные тесты для доменной модели (crate::domain).

use card_player::domain::*;

/// Утилита: карта удобным конструктором.
fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Card: поля, value по рангу и произвольный value.
#[test]
fn card_fields_and_value() {
    let c = card(Suit::Spades, Rank::Ace);
    assert_eq!(c.suit, Suit::Spades);
    assert_eq!(c.rank, Rank::Ace);
    assert_eq!(c.value, 14);

    // value не проверяется, если его задали явно
    let odd = Card::with_value(Suit::Clubs, Rank::Two, 99);
    assert_eq!(odd.value, 99);
    assert_ne!(odd, card(Suit::Clubs, Rank::Two));
}

/// Card::from_value / Rank::from_value: только 2..=14.
#[test]
fn card_from_value_validates_range() {
    for v in 2..=14u8 {
        let c = Card::from_value(Suit::Hearts, v).expect("valid rank value");
        assert_eq!(c.value, v);
        assert_eq!(c.rank.value(), v);
    }

    assert_eq!(Rank::from_value(1), Err(CardError::InvalidRank(1)));
    assert_eq!(Rank::from_value(15), Err(CardError::InvalidRank(15)));
    assert!(Card::from_value(Suit::Diamonds, 0).is_err());
}

/// Display: "<rank> of <suit>".
#[test]
fn card_display_is_rank_of_suit() {
    assert_eq!(card(Suit::Hearts, Rank::King).to_string(), "K of Hearts");
    assert_eq!(card(Suit::Clubs, Rank::Two).to_string(), "2 of Clubs");
    assert_eq!(card(Suit::Diamonds, Rank::Ten).to_string(), "10 of Diamonds");
    assert_eq!(card(Suit::Spades, Rank::Ace).to_string(), "A of Spades");
}

/// Компактная запись: code() + FromStr.
#[test]
fn card_code_and_parse() {
    let cards = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Diamonds, Rank::Nine),
    ];

    for c in cards {
        let parsed: Card = c.code().parse().expect("parse Card from code");
        assert_eq!(parsed, c);
    }

    assert_eq!(card(Suit::Spades, Rank::Ten).code(), "Ts");
    assert_eq!("10s".parse::<Card>().unwrap(), card(Suit::Spades, Rank::Ten));
    assert_eq!("kH".parse::<Card>().unwrap(), card(Suit::Hearts, Rank::King));

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("XYZ".parse::<Card>().is_err());
    assert!("1c".parse::<Card>().is_err());
    assert!("Acx".parse::<Card>().is_err());
    assert!(matches!("Qx".parse::<Card>(), Err(CardError::Parse(_))));
}

/// Chips: арифметика и знак.
#[test]
fn chips_arithmetic() {
    let a = Chips(100);
    let b = Chips(30);

    assert_eq!(a - b, Chips(70));
    assert_eq!(a + b, Chips(130));

    let mut x = Chips(10);
    x -= Chips(20);
    assert_eq!(x, Chips(-10));
    assert!(x.is_negative());

    x += Chips(10);
    assert!(x.is_zero());
    assert_eq!(Chips::new(5).to_string(), "5");
}

/// Новый игрок: стек как передали, пустая рука, не сфолдил.
#[test]
fn player_new_defaults() {
    for start in [0, 1, 100, 1_000_000, -50] {
        let p = Player::new("P", Chips(start));
        assert_eq!(p.chips(), Chips(start));
        assert!(p.hand().is_empty());
        assert!(!p.is_folded());
        assert_eq!(p.name(), "P");
    }
}

/// receive_card: рука = последовательность выданных карт.
#[test]
fn player_receive_card_preserves_order() {
    let mut p = Player::new("Dealer's friend", Chips(10));
    let dealt = [
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::King), // дубликаты допустимы
        card(Suit::Spades, Rank::Seven),
    ];

    for (i, c) in dealt.iter().enumerate() {
        p.receive_card(*c);
        assert_eq!(p.hand().len(), i + 1);
    }

    assert_eq!(p.hand(), &dealt[..]);
}

/// bet: граница "ровно весь стек" и отказ без изменений.
#[test]
fn player_bet_boundaries() {
    let mut p = Player::new("Carol", Chips(50));

    assert_eq!(
        p.bet(Chips(51)),
        Err(PlayerError::InsufficientChips {
            requested: Chips(51),
            available: Chips(50),
        })
    );
    assert_eq!(p.chips(), Chips(50));

    assert_eq!(p.bet(Chips(0)), Ok(Chips(50)));
    assert_eq!(p.bet(Chips(50)), Ok(Chips(0)));
    assert!(p.chips().is_zero());

    assert!(p.bet(Chips(1)).is_err());
    assert!(p.chips().is_zero());
}

/// bet: для любых C и A – отказ при A > C, иначе C - A.
#[test]
fn player_bet_property_grid() {
    for c in [0i64, 1, 7, 100] {
        for a in [0i64, 1, 6, 7, 8, 99, 100, 101] {
            let mut p = Player::new("grid", Chips(c));
            let res = p.bet(Chips(a));
            if a > c {
                assert!(res.is_err(), "C={c} A={a}");
                assert_eq!(p.chips(), Chips(c));
            } else {
                assert_eq!(res, Ok(Chips(c - a)), "C={c} A={a}");
                assert_eq!(p.chips(), Chips(c - a));
            }
        }
    }
}

/// Отрицательная ставка отклоняется и не увеличивает стек.
#[test]
fn player_negative_bet_rejected() {
    let mut p = Player::new("Mallory", Chips(10));
    assert_eq!(p.bet(Chips(-5)), Err(PlayerError::NegativeBet(Chips(-5))));
    assert_eq!(p.chips(), Chips(10));
    assert!(!p.try_bet(Chips(-1)));
    assert_eq!(p.chips(), Chips(10));
}

/// try_bet: булев контракт поверх bet.
#[test]
fn player_try_bet_bool_contract() {
    let mut p = Player::new("Dave", Chips(20));
    assert!(p.try_bet(Chips(20)));
    assert!(!p.try_bet(Chips(1)));
    assert_eq!(p.chips(), Chips::ZERO);
}

/// all_in: весь стек уходит в ставку.
#[test]
fn player_all_in() {
    let mut p = Player::new("Eve", Chips(75));
    assert_eq!(p.all_in(), Chips(75));
    assert_eq!(p.chips(), Chips::ZERO);
    assert_eq!(p.all_in(), Chips::ZERO);
}

/// fold идемпотентен.
#[test]
fn player_fold_is_idempotent() {
    let mut p = Player::new("Frank", Chips(1));
    p.fold();
    assert!(p.is_folded());
    p.fold();
    assert!(p.is_folded());
}

/// Сценарий из описания: Alice, 100 фишек.
#[test]
fn alice_scenario() {
    let mut p = Player::new("Alice", Chips(100));

    assert!(p.try_bet(Chips(30)));
    assert_eq!(p.chips(), Chips(70));

    assert!(!p.try_bet(Chips(1000)));
    assert_eq!(p.chips(), Chips(70));

    p.receive_card(Card::with_value(Suit::Spades, Rank::Ace, 14));
    assert_eq!(p.hand().len(), 1);

    p.fold();
    assert!(p.is_folded());
}

/// Текст руки: точный формат.
#[test]
fn bob_hand_text_block() {
    let mut p = Player::new("Bob", Chips(0));
    p.receive_card(Card::with_value(Suit::Hearts, Rank::King, 13));
    p.receive_card(Card::with_value(Suit::Clubs, Rank::Two, 2));

    let mut out = Vec::new();
    p.show_hand(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Bob's hand:\n  K of Hearts\n  2 of Clubs\n"
    );

    let view = p.hand_view();
    assert_eq!(view.player_name, "Bob");
    assert_eq!(view.len(), 2);
    assert_eq!(view.to_string(), "Bob's hand:\n  K of Hearts\n  2 of Clubs\n");
}

/// Пустая рука: только заголовок.
#[test]
fn empty_hand_text_is_header_only() {
    let p = Player::new("Nobody", Chips(0));
    let view = p.hand_view();
    assert!(view.is_empty());
    assert_eq!(view.to_string(), "Nobody's hand:\n");
}
