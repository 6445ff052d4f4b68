mod graveyard;
pub use graveyard::Graveyard;
