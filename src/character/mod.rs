//! Character sheets and the rules that fill them in

pub mod assembler;
pub mod attributes;
pub mod derived;
pub mod sheet;

pub use assembler::{
    AssemblyInput, AttributePolicy, CharacterAssembler, CREDIT_RATING, INTEREST_BONUS,
    OCCUPATION_LADDER,
};
pub use attributes::{allocate, allocate_attributes, parse_priority, AttributeSet, ATTRIBUTE_LADDER};
pub use derived::{
    damage_bonus_and_build, hit_points, magic_points, movement, roll_luck, DamageBonus,
    DerivedScores,
};
pub use sheet::{Character, Profile};
