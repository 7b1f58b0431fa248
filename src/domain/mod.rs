pub mod card;
pub mod retrospective;
pub mod vote;
