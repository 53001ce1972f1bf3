pub mod flag_card;

pub use flag_card::{card_container_style, flag_card, flag_slot, pill_button_style};
