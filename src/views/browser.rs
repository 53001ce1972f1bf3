use crate::components::flag_card;
use crate::message::Message;
use crate::model::FlagCard;
use iced::widget::{column, text, Row};
use iced::{Alignment, Element};

const CARDS_PER_ROW: usize = 4;

pub fn browser_panel(cards: &[FlagCard]) -> Element<'_, Message> {
    if cards.is_empty() {
        return text("No countries to show").into();
    }

    cards
        .chunks(CARDS_PER_ROW)
        .fold(column![].spacing(16), |grid, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(16), |row, card| row.push(flag_card(card)));
            grid.push(row.align_y(Alignment::Start))
        })
        .align_x(Alignment::Center)
        .into()
}
