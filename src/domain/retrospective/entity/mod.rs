pub mod participant;
pub mod retrospective;
