//! Best-guess emoji and shelf-life lookup for ingredient names.
//!
//! Both tables are keyed by lowercase names. A name is looked up whole first
//! ("peanut butter"), then word by word from the left ("organic bananas" ->
//! "bananas"). Unknown names are a normal outcome and get [`DEFAULT_EMOJI`]
//! with no shelf-life.

use crate::domain::model::Classification;

pub const DEFAULT_EMOJI: &str = "📦";

static EMOJI_TABLE: &[(&str, &str)] = &[
    ("peanut butter", "🥜"),
    ("ice cream", "🍨"),
    ("sweet potato", "🍠"),
    ("milk", "🥛"),
    ("egg", "🥚"),
    ("eggs", "🥚"),
    ("banana", "🍌"),
    ("bananas", "🍌"),
    ("bread", "🍞"),
    ("apple", "🍎"),
    ("apples", "🍎"),
    ("cheese", "🧀"),
    ("chicken", "🍗"),
    ("butter", "🧈"),
    ("rice", "🍚"),
    ("tomato", "🍅"),
    ("tomatoes", "🍅"),
    ("carrot", "🥕"),
    ("carrots", "🥕"),
    ("potato", "🥔"),
    ("potatoes", "🥔"),
    ("onion", "🧅"),
    ("onions", "🧅"),
    ("garlic", "🧄"),
    ("lettuce", "🥬"),
    ("broccoli", "🥦"),
    ("avocado", "🥑"),
    ("lemon", "🍋"),
    ("lemons", "🍋"),
    ("orange", "🍊"),
    ("oranges", "🍊"),
    ("grapes", "🍇"),
    ("strawberries", "🍓"),
    ("yogurt", "🥛"),
    ("fish", "🐟"),
    ("salmon", "🐟"),
    ("beef", "🥩"),
    ("steak", "🥩"),
    ("bacon", "🥓"),
    ("pasta", "🍝"),
    ("spaghetti", "🍝"),
    ("flour", "🌾"),
    ("honey", "🍯"),
    ("coffee", "☕"),
    ("tea", "🍵"),
    ("corn", "🌽"),
    ("mushrooms", "🍄"),
];

static SHELF_LIFE_TABLE: &[(&str, u32)] = &[
    ("peanut butter", 180),
    ("ice cream", 60),
    ("sweet potato", 30),
    ("milk", 7),
    ("egg", 21),
    ("eggs", 21),
    ("banana", 5),
    ("bananas", 5),
    ("bread", 5),
    ("apple", 30),
    ("apples", 30),
    ("cheese", 21),
    ("chicken", 2),
    ("butter", 30),
    ("rice", 365),
    ("tomato", 7),
    ("tomatoes", 7),
    ("carrot", 21),
    ("carrots", 21),
    ("potato", 30),
    ("potatoes", 30),
    ("onion", 30),
    ("onions", 30),
    ("garlic", 90),
    ("lettuce", 7),
    ("broccoli", 5),
    ("avocado", 4),
    ("lemon", 21),
    ("lemons", 21),
    ("orange", 14),
    ("oranges", 14),
    ("grapes", 7),
    ("strawberries", 3),
    ("yogurt", 14),
    ("fish", 2),
    ("salmon", 2),
    ("beef", 3),
    ("steak", 3),
    ("bacon", 7),
    ("pasta", 730),
    ("spaghetti", 730),
    ("flour", 180),
    ("honey", 730),
    ("coffee", 180),
    ("tea", 365),
    ("corn", 5),
    ("mushrooms", 7),
];

/// Lowercased, trimmed form used as the table key.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn find<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Full-string match first, then the first whitespace token that matches.
fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return None;
    }

    find(table, &normalized).or_else(|| {
        normalized
            .split_whitespace()
            .find_map(|token| find(table, token))
    })
}

pub fn lookup_emoji(name: &str) -> &'static str {
    lookup(EMOJI_TABLE, name).unwrap_or(DEFAULT_EMOJI)
}

pub fn lookup_shelf_life(name: &str) -> Option<u32> {
    lookup(SHELF_LIFE_TABLE, name)
}

pub fn classify(name: &str) -> Classification {
    Classification {
        emoji: lookup_emoji(name),
        shelf_life_days: lookup_shelf_life(name),
    }
}
