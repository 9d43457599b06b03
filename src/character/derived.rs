//! Derived scores: damage bonus, build, movement, HP, MP, luck
//!
//! All division truncates toward zero. Only luck touches the dice.

use crate::character::attributes::AttributeSet;
use crate::core::dice;
use crate::core::types::Attribute;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage bonus encoded as an integer: `<= 0` is a flat modifier,
/// positive `v` is `+(v/10)D(v%10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DamageBonus(pub i32);

impl fmt::Display for DamageBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 0 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "+{}D{}", self.0 / 10, self.0 % 10)
        }
    }
}

/// Upper bounds (exclusive) on STR+SIZ and the resulting (damage bonus, build)
const DAMAGE_BUILD_TABLE: [(i32, i32, i32); 9] = [
    (64, -2, -2),
    (84, -1, -1),
    (124, 0, 0),
    (164, 14, 1),
    (204, 16, 2),
    (284, 26, 3),
    (364, 36, 4),
    (444, 46, 5),
    (524, 56, 6),
];

pub fn damage_bonus_and_build(strength: i32, size: i32) -> (DamageBonus, i32) {
    let total = strength + size;
    DAMAGE_BUILD_TABLE
        .iter()
        .find(|(bound, _, _)| total < *bound)
        .map(|&(_, db, build)| (DamageBonus(db), build))
        .unwrap_or((DamageBonus(66), 7))
}

pub fn movement(dex: i32, strength: i32, size: i32) -> i32 {
    if dex < size && strength < size {
        7
    } else if dex > size && strength > size {
        9
    } else {
        8
    }
}

pub fn hit_points(con: i32, size: i32) -> i32 {
    (con + size) / 10
}

pub fn magic_points(pow: i32) -> i32 {
    pow / 5
}

/// 3d6 x 5
pub fn roll_luck<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    dice::roll(rng, 3, 6) * 5
}

/// The derived block of a character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedScores {
    pub hp: i32,
    pub mp: i32,
    pub build: i32,
    #[serde(rename = "move")]
    pub movement: i32,
    pub luck: i32,
    pub damage_bonus: DamageBonus,
}

impl DerivedScores {
    pub fn compute<R: Rng + ?Sized>(attributes: &AttributeSet, rng: &mut R) -> Self {
        let strength = attributes.get(Attribute::Str);
        let size = attributes.get(Attribute::Siz);
        let (damage_bonus, build) = damage_bonus_and_build(strength, size);

        Self {
            hp: hit_points(attributes.get(Attribute::Con), size),
            mp: magic_points(attributes.get(Attribute::Pow)),
            build,
            movement: movement(attributes.get(Attribute::Dex), strength, size),
            luck: roll_luck(rng),
            damage_bonus,
        }
    }
}

impl fmt::Display for DerivedScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP: {}, DB: {}, Build: {}, Move: {}, MP: {}, Luck: {}",
            self.hp, self.damage_bonus, self.build, self.movement, self.mp, self.luck
        )
    }
}
