//! The Set rule.
//!
//! Three cards form a Set when, on each attribute independently, the three
//! values are all the same or all different. Two-and-one never passes.
//! Each attribute is checked with equality only.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Attribute, AttributeValue, Card, CardFace, CardSet};

/// Attributes on which a triple fails the rule.
pub type Conflicts = SmallVec<[Attribute; 4]>;

/// Check one attribute: all equal or pairwise distinct.
#[must_use]
pub fn all_same_or_all_different<T: PartialEq>(a: &T, b: &T, c: &T) -> bool {
    let all_same = a == b && b == c;
    let all_different = a != b && b != c && a != c;
    all_same || all_different
}

/// List the attributes on which `a`, `b`, `c` break the rule.
///
/// Empty means the triple is a Set.
#[must_use]
pub fn conflicts(a: &CardFace, b: &CardFace, c: &CardFace) -> Conflicts {
    let mut out = Conflicts::new();
    if !all_same_or_all_different(&a.number, &b.number, &c.number) {
        out.push(Attribute::Number);
    }
    if !all_same_or_all_different(&a.shape, &b.shape, &c.shape) {
        out.push(Attribute::Shape);
    }
    if !all_same_or_all_different(&a.color, &b.color, &c.color) {
        out.push(Attribute::Color);
    }
    if !all_same_or_all_different(&a.shading, &b.shading, &c.shading) {
        out.push(Attribute::Shading);
    }
    out
}

/// Check whether three faces form a Set.
///
/// ```
/// use set_game::cards::{CardFace, Color, Number, Shading, Shape};
/// use set_game::rules::is_set;
///
/// let a = CardFace::new(Number::One, Shape::Diamond, Color::Red, Shading::Solid);
/// let b = CardFace::new(Number::Two, Shape::Diamond, Color::Red, Shading::Solid);
/// let c = CardFace::new(Number::Three, Shape::Diamond, Color::Red, Shading::Solid);
/// assert!(is_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_set(a: &CardFace, b: &CardFace, c: &CardFace) -> bool {
    conflicts(a, b, c).is_empty()
}

/// The unique face that completes a Set with `a` and `b`.
///
/// If `a == b` the result is that same face, which cannot occur in a
/// real deck.
#[must_use]
pub fn third_card(a: &CardFace, b: &CardFace) -> CardFace {
    CardFace {
        number: AttributeValue::complete(a.number, b.number),
        shape: AttributeValue::complete(a.shape, b.shape),
        color: AttributeValue::complete(a.color, b.color),
        shading: AttributeValue::complete(a.shading, b.shading),
    }
}

/// Every Set among `cards`, each as ids in the order the cards appear.
///
/// Looks up the completing face for every pair, so it runs in O(n²).
#[must_use]
pub fn find_sets(cards: &[Card]) -> Vec<CardSet> {
    sets_among(cards).collect()
}

/// The first Set among `cards`, if any.
#[must_use]
pub fn first_set(cards: &[Card]) -> Option<CardSet> {
    sets_among(cards).next()
}

/// Lazily walk the Sets among `cards`, lowest pair first.
fn sets_among(cards: &[Card]) -> impl Iterator<Item = CardSet> + '_ {
    let positions: FxHashMap<CardFace, usize> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| (card.face, i))
        .collect();

    (0..cards.len())
        .flat_map(move |i| ((i + 1)..cards.len()).map(move |j| (i, j)))
        .filter_map(move |(i, j)| {
            let wanted = third_card(&cards[i].face, &cards[j].face);
            // Each Set is reached from three pairs; keep the one where k is last
            match positions.get(&wanted) {
                Some(&k) if k > j => Some([cards[i].id, cards[j].id, cards[k].id]),
                _ => None,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Color, Deck, Number, Shading, Shape};

    fn face(n: Number, s: Shape, c: Color, sh: Shading) -> CardFace {
        CardFace::new(n, s, c, sh)
    }

    #[test]
    fn test_numbers_all_different() {
        let a = face(Number::One, Shape::Diamond, Color::Red, Shading::Solid);
        let b = face(Number::Two, Shape::Diamond, Color::Red, Shading::Solid);
        let c = face(Number::Three, Shape::Diamond, Color::Red, Shading::Solid);

        assert!(is_set(&a, &b, &c));
    }

    #[test]
    fn test_two_same_one_different_fails() {
        let a = face(Number::One, Shape::Diamond, Color::Red, Shading::Solid);
        let b = face(Number::Two, Shape::Diamond, Color::Red, Shading::Solid);
        let c = face(Number::Three, Shape::Diamond, Color::Purple, Shading::Solid);

        assert!(!is_set(&a, &b, &c));
        assert_eq!(conflicts(&a, &b, &c).as_slice(), &[Attribute::Color]);
    }

    #[test]
    fn test_everything_different() {
        let a = face(Number::One, Shape::Diamond, Color::Red, Shading::Solid);
        let b = face(Number::Two, Shape::Squiggle, Color::Green, Shading::Striped);
        let c = face(Number::Three, Shape::Oval, Color::Purple, Shading::Open);

        assert!(is_set(&a, &b, &c));
    }

    #[test]
    fn test_multiple_conflicts_reported_in_order() {
        let a = face(Number::One, Shape::Diamond, Color::Red, Shading::Solid);
        let b = face(Number::One, Shape::Squiggle, Color::Red, Shading::Open);
        let c = face(Number::Two, Shape::Oval, Color::Green, Shading::Open);

        assert_eq!(
            conflicts(&a, &b, &c).as_slice(),
            &[Attribute::Number, Attribute::Color, Attribute::Shading]
        );
    }

    #[test]
    fn test_third_card_completes() {
        let a = face(Number::One, Shape::Oval, Color::Red, Shading::Striped);
        let b = face(Number::Three, Shape::Oval, Color::Green, Shading::Open);

        let c = third_card(&a, &b);
        assert_eq!(c, face(Number::Two, Shape::Oval, Color::Purple, Shading::Solid));
        assert!(is_set(&a, &b, &c));
    }

    #[test]
    fn test_find_sets_on_full_deck() {
        // 81 * 80 / 6 = 1080 distinct Sets in a complete deck
        let deck = Deck::full();
        assert_eq!(find_sets(deck.cards()).len(), 1080);
    }

    #[test]
    fn test_find_sets_entries_are_sets() {
        let deck = Deck::full();
        let cards = &deck.cards()[..12];
        for [a, b, c] in find_sets(cards) {
            let f = |id: CardId| deck.cards()[id.raw() as usize].face;
            assert!(is_set(&f(a), &f(b), &f(c)));
        }
    }

    #[test]
    fn test_first_set_agrees_with_find_sets() {
        let deck = Deck::full();
        let cards = &deck.cards()[..9];
        assert_eq!(first_set(cards), find_sets(cards).first().copied());
        assert_eq!(first_set(&[]), None);
    }

    #[test]
    fn test_no_set_among_cap() {
        // Four cards with no Set among them
        let cards: Vec<Card> = [
            face(Number::One, Shape::Diamond, Color::Red, Shading::Solid),
            face(Number::One, Shape::Diamond, Color::Red, Shading::Striped),
            face(Number::One, Shape::Diamond, Color::Green, Shading::Solid),
            face(Number::One, Shape::Diamond, Color::Green, Shading::Striped),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, f)| Card::new(CardId::new(i as u8), f))
        .collect();

        assert!(find_sets(&cards).is_empty());
        assert_eq!(first_set(&cards), None);
    }
}
