pub mod card;
pub mod stack;

pub use card::{Card, CardResponse, CreateCard, MoveCard, UpdateCard};
pub use stack::{Cover, CoverKind, CreateStack, StackResponse, StackWithCount, UpdateStack};
