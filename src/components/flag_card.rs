use crate::message::Message;
use crate::model::{FlagCard, FlagImage};
use crate::utils::card_title;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, text, Container, Image, Space};
use iced::{Alignment, Background, Color, Element, Length, Shadow, Theme};

const CARD_WIDTH: f32 = 220.0;
const FLAG_HEIGHT: f32 = 120.0;

pub fn flag_card(card: &FlagCard) -> Container<'_, Message> {
    let content = column![
        flag_slot(&card.image, FLAG_HEIGHT),
        text(card_title(&card.country))
            .size(18)
            .wrapping(Wrapping::Word),
        more_info_button(&card.country),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    container(content)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .style(card_container_style)
}

/// Flag image area. A missing flag collapses to nothing; a pending one holds the space.
pub fn flag_slot(image: &FlagImage, height: f32) -> Element<'static, Message> {
    match image {
        FlagImage::Loaded(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        FlagImage::Pending => container(text("Loading flag…").size(14))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .into(),
        FlagImage::Missing => Space::with_height(Length::Shrink).into(),
    }
}

fn more_info_button(country: &str) -> iced::widget::Button<'static, Message> {
    let content = container(text("More Info").size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::ShowDetail(country.to_string()))
        .style(pill_button_style)
}

pub fn card_container_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(12.0),
        },
        ..Default::default()
    }
}

pub fn pill_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let background_color = match status {
        iced::widget::button::Status::Active => palette.primary.strong.color,
        iced::widget::button::Status::Hovered => palette.primary.base.color,
        iced::widget::button::Status::Pressed => palette.primary.base.color.scale_alpha(0.9),
        iced::widget::button::Status::Disabled => palette.primary.strong.color.scale_alpha(0.5),
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color: palette.primary.strong.text,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(999.0),
        },
        shadow: Shadow::default(),
    }
}
