use iced::widget::image::Handle;

use crate::api::LookupFailure;
use crate::model::CountryDetail;

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    ShowDetail(String),
    Return,
    FlagLoaded {
        generation: u64,
        slot: usize,
        image: Option<Handle>,
    },
    DetailLoaded {
        generation: u64,
        result: Result<CountryDetail, LookupFailure>,
    },
    DetailFlagLoaded {
        generation: u64,
        image: Option<Handle>,
    },
}
