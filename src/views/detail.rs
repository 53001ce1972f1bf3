use crate::components::{card_container_style, flag_slot, pill_button_style};
use crate::message::Message;
use crate::model::DetailPanel;
use crate::utils::detail_rows;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

const DETAIL_FLAG_HEIGHT: f32 = 200.0;

pub fn detail_panel(panel: &DetailPanel) -> Element<'_, Message> {
    let return_button = button(text("Return").size(14))
        .padding([6, 20])
        .on_press(Message::Return)
        .style(pill_button_style);

    let body: Element<'_, Message> = if let Some(detail) = &panel.detail {
        let facts = detail_rows(detail)
            .into_iter()
            .fold(column![].spacing(8), |facts, fact| {
                facts.push(
                    row![
                        text(format!("{}:", fact.label)).width(Length::FillPortion(1)),
                        text(fact.value)
                            .width(Length::FillPortion(2))
                            .wrapping(Wrapping::Word),
                    ]
                    .spacing(12),
                )
            });

        column![
            text(&detail.name).size(28),
            flag_slot(&panel.image, DETAIL_FLAG_HEIGHT),
            facts,
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
    } else if panel.loading {
        text("Loading country details…").into()
    } else {
        text("No details available").into()
    };

    container(column![body, return_button].spacing(20).align_x(Alignment::Center))
        .padding(24)
        .width(Length::Fixed(480.0))
        .style(card_container_style)
        .into()
}
