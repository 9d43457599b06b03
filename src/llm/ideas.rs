//! Stock character requests for when the player doesn't supply one

use rand::seq::SliceRandom;
use rand::Rng;

pub const CHARACTER_IDEAS: &[&str] = &[
    "A retired police detective who still keeps the files of one unsolved case.",
    "A young librarian at a university archive with a talent for old scripts.",
    "A professor of languages studying occult history, and a skilled brawler. Aged 63.",
    "A nurse working night shifts in a rural hospital.",
    "A freelance photographer who sells pictures of abandoned buildings.",
    "A fisherman from a small coastal village who has seen lights under the water.",
    "A tabloid journalist looking for the story that will make a career.",
    "An antique dealer who is not too careful about where things come from.",
    "A parish priest losing faith after a strange confession.",
    "A former soldier now working as a private security guard.",
    "A university student of archaeology on a first field dig.",
    "A wealthy heir with too much free time and an interest in spiritualism.",
];

/// Pick one stock request
pub fn random_idea<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CHARACTER_IDEAS.choose(rng).copied().unwrap_or(CHARACTER_IDEAS[0])
}
