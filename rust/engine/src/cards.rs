use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Represents one of the four Minor Arcana suits.
/// Used as a component of [`Card`] for the 56 suited, ranked cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Wands suit (creativity and will)
    Wands,
    /// Cups suit (emotion and intuition)
    Cups,
    /// Swords suit (intellect and conflict)
    Swords,
    /// Pentacles suit (work and material matters)
    Pentacles,
}

impl Suit {
    pub fn label(&self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    /// Single ASCII letter used in compact card glyphs.
    pub fn letter(&self) -> char {
        match self {
            Suit::Wands => 'W',
            Suit::Cups => 'C',
            Suit::Swords => 'S',
            Suit::Pentacles => 'P',
        }
    }

    /// Thematic domain of the suit, used to compose Minor Arcana meanings.
    pub fn domain(&self) -> &'static str {
        match self {
            Suit::Wands => "creativity, will, and ambition",
            Suit::Cups => "emotion, relationships, and intuition",
            Suit::Swords => "intellect, conflict, and truth",
            Suit::Pentacles => "work, body, and material matters",
        }
    }
}

/// Represents the rank of a Minor Arcana card from Ace through King.
/// Numeric values 1..=14 line up with the card's `number` field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Page (11)
    Page,
    /// Knight (12)
    Knight,
    /// Queen (13)
    Queen,
    /// King (14)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Page,
            12 => Rank::Knight,
            13 => Rank::Queen,
            _ => Rank::King,
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Page => "Page",
            Rank::Knight => "Knight",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Short form used in compact glyphs. Knight is "N" so it never
    /// collides with King.
    pub fn short(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Page => "P",
            Rank::Knight => "N",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Numerological theme of the rank, used to compose Minor Arcana
    /// meanings together with [`Suit::domain`].
    pub fn theme(&self) -> &'static str {
        match self {
            Rank::Ace => "new potential",
            Rank::Two => "balance and partnership",
            Rank::Three => "growth and collaboration",
            Rank::Four => "stability and rest",
            Rank::Five => "conflict and loss",
            Rank::Six => "harmony and recovery",
            Rank::Seven => "assessment and perseverance",
            Rank::Eight => "mastery and movement",
            Rank::Nine => "fruition and resilience",
            Rank::Ten => "completion and legacy",
            Rank::Page => "curiosity and study",
            Rank::Knight => "pursuit and action",
            Rank::Queen => "maturity and care",
            Rank::King => "command and authority",
        }
    }
}

/// The two card classes of the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// The 22 unique thematic cards, numbered 0..=21.
    Major,
    /// The 56 suited, ranked cards.
    Minor,
}

/// Name plus upright/reversed keyword phrases for each Major Arcana card,
/// indexed by card number.
const MAJORS: [(&str, &str, &str); 22] = [
    ("The Fool", "new beginnings, spontaneity", "recklessness, hesitation"),
    ("The Magician", "willpower, skill", "manipulation, untapped talent"),
    (
        "The High Priestess",
        "intuition, hidden knowledge",
        "secrets withheld, disconnection",
    ),
    ("The Empress", "abundance, nurturing", "dependence, creative block"),
    ("The Emperor", "authority, structure", "tyranny, rigidity"),
    ("The Hierophant", "tradition, guidance", "dogma, rebellion"),
    ("The Lovers", "union, choice", "disharmony, indecision"),
    ("The Chariot", "determination, victory", "loss of direction, aggression"),
    ("Strength", "courage, patience", "self-doubt, weakness"),
    ("The Hermit", "introspection, solitude", "isolation, withdrawal"),
    ("Wheel of Fortune", "cycles, destiny", "resistance to change, setbacks"),
    ("Justice", "fairness, truth", "dishonesty, imbalance"),
    ("The Hanged Man", "surrender, new perspective", "stalling, martyrdom"),
    ("Death", "transformation, endings", "stagnation, fear of change"),
    ("Temperance", "moderation, patience", "excess, discord"),
    ("The Devil", "bondage, materialism", "release, reclaiming power"),
    ("The Tower", "sudden upheaval, revelation", "disaster averted, lingering fear"),
    ("The Star", "hope, renewal", "despair, faithlessness"),
    ("The Moon", "illusion, the subconscious", "confusion lifting, clarity"),
    ("The Sun", "joy, success", "delayed joy, dimmed optimism"),
    ("Judgement", "reckoning, awakening", "self-doubt, avoidance"),
    ("The World", "completion, wholeness", "unfinished business, delays"),
];

/// A single card of the 78-card catalog.
///
/// Identity is carried by `id`; equality and hashing compare ids only, so
/// two handles to the same catalog entry always compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Stable unique identifier, 0..=77 across the catalog.
    pub id: u8,
    /// Card class (Major or Minor).
    pub arcana: Arcana,
    /// Suit for Minor Arcana cards; `None` for majors.
    pub suit: Option<Suit>,
    /// Major card number 0..=21, or Minor rank value 1..=14.
    pub number: u8,
    /// Display name, e.g. "The Tower" or "Knight of Cups".
    pub name: String,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Card {
    /// Rank of a Minor Arcana card; `None` for majors.
    pub fn rank(&self) -> Option<Rank> {
        match self.arcana {
            Arcana::Major => None,
            Arcana::Minor => Some(Rank::from_u8(self.number)),
        }
    }

    /// Keyword phrases for the upright orientation.
    pub fn keywords(&self) -> Vec<String> {
        match self.arcana {
            Arcana::Major => MAJORS[self.number as usize]
                .1
                .split(", ")
                .map(str::to_string)
                .collect(),
            Arcana::Minor => {
                let mut words: Vec<String> = Rank::from_u8(self.number)
                    .theme()
                    .split(" and ")
                    .map(str::to_string)
                    .collect();
                if let Some(suit) = self.suit {
                    words.push(suit.label().to_lowercase());
                }
                words
            }
        }
    }

    /// Divinatory meaning line for the given orientation.
    pub fn meaning(&self, reversed: bool) -> String {
        match self.arcana {
            Arcana::Major => {
                let (_, upright, rev) = MAJORS[self.number as usize];
                if reversed { rev.to_string() } else { upright.to_string() }
            }
            Arcana::Minor => {
                let theme = Rank::from_u8(self.number).theme();
                let domain = self.suit.map(|s| s.domain()).unwrap_or("the everyday");
                if reversed {
                    format!("{theme} blocked or turned inward within {domain}")
                } else {
                    format!("{theme} expressed through {domain}")
                }
            }
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles]
}

pub fn all_ranks() -> [Rank; 14] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ]
}

const MINOR_ID_BASE: u8 = 22;

/// The 22 Major Arcana cards, ids 0..=21 matching their numbers.
pub fn major_arcana() -> Vec<Card> {
    (0u8..22)
        .map(|number| Card {
            id: number,
            arcana: Arcana::Major,
            suit: None,
            number,
            name: MAJORS[number as usize].0.to_string(),
        })
        .collect()
}

/// The 56 Minor Arcana cards, ids 22..=77 in suit-then-rank order.
pub fn minor_arcana() -> Vec<Card> {
    let mut v = Vec::with_capacity(56);
    for (suit_index, &suit) in all_suits().iter().enumerate() {
        for &rank in all_ranks().iter() {
            let value = rank.value();
            v.push(Card {
                id: MINOR_ID_BASE + suit_index as u8 * 14 + (value - 1),
                arcana: Arcana::Minor,
                suit: Some(suit),
                number: value,
                name: format!("{} of {}", rank.label(), suit.label()),
            });
        }
    }
    v
}

/// The full 78-card catalog, majors then minors, ids 0..=77.
pub fn full_catalog() -> Vec<Card> {
    let mut v = Vec::with_capacity(78);
    v.extend(major_arcana());
    v.extend(minor_arcana());
    v
}
