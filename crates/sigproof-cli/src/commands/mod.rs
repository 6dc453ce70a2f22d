pub mod inspect;
pub mod message;
pub mod track;
pub mod verify;
