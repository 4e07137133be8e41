use std::cmp::Ordering;

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Human-readable label used in showdown summaries.
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, zero-padded
    pub kickers: [u8; 5],
}

/// Evaluate a five-card draw hand into a comparable strength.
///
/// Categories are checked in precedence order; the first match wins. Two
/// strengths compare lexicographically on `(category, kickers)` via
/// [`compare_hands`], higher being better.
pub fn evaluate_hand(cards: &[Card; 5]) -> HandStrength {
    // Ranks descending; the wheel rewrites them to 5-4-3-2-1 (ace low).
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for &r in &ranks {
        rank_counts[r as usize] += 1;
    }
    let distinct = rank_counts.iter().filter(|&&c| c > 0).count();

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut straight = false;
    if distinct == 5 {
        if ranks[0] - ranks[4] == 4 {
            straight = true;
        } else if ranks == [14, 5, 4, 3, 2] {
            straight = true;
            ranks = vec![5, 4, 3, 2, 1];
        }
    }

    if straight && flush {
        return HandStrength {
            category: Category::StraightFlush,
            kickers: [ranks[0], 0, 0, 0, 0],
        };
    }

    if let Some(quad) = rank_with_count(&rank_counts, 4) {
        let kicker = ranks
            .iter()
            .copied()
            .find(|&r| r != quad)
            .unwrap_or_default();
        return HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        };
    }

    let trip = rank_with_count(&rank_counts, 3);
    let pairs = ranks_with_count(&rank_counts, 2);

    if let (Some(t), Some(&p)) = (trip, pairs.first()) {
        return HandStrength {
            category: Category::FullHouse,
            kickers: [t, p, 0, 0, 0],
        };
    }

    if flush {
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks);
        return HandStrength {
            category: Category::Flush,
            kickers: k,
        };
    }

    if straight {
        return HandStrength {
            category: Category::Straight,
            kickers: [ranks[0], 0, 0, 0, 0],
        };
    }

    if let Some(t) = trip {
        let mut k = [t, 0, 0, 0, 0];
        for (i, r) in ranks.iter().filter(|&&r| r != t).enumerate() {
            k[i + 1] = *r;
        }
        return HandStrength {
            category: Category::ThreeOfAKind,
            kickers: k,
        };
    }

    if pairs.len() == 2 {
        let kicker = ranks
            .iter()
            .copied()
            .find(|r| !pairs.contains(r))
            .unwrap_or_default();
        return HandStrength {
            category: Category::TwoPair,
            kickers: [pairs[0], pairs[1], kicker, 0, 0],
        };
    }

    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (i, r) in ranks.iter().filter(|&&r| r != p).enumerate() {
            k[i + 1] = *r;
        }
        return HandStrength {
            category: Category::OnePair,
            kickers: k,
        };
    }

    let mut k = [0u8; 5];
    k.copy_from_slice(&ranks);
    HandStrength {
        category: Category::HighCard,
        kickers: k,
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn rank_with_count(rank_counts: &[u8; 15], count: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| rank_counts[r as usize] == count)
}

/// Ranks appearing exactly `count` times, highest first.
fn ranks_with_count(rank_counts: &[u8; 15], count: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] == count)
        .collect()
}
