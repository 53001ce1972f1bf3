use crate::api::{CountryApi, LookupFailure};
use crate::components::pill_button_style;
use crate::config::{AppConfig, DEFAULT_API_BASE};
use crate::controller::{Fetch, FlagBrowser};
use crate::message::Message;
use crate::model::{Catalog, ViewState};
use crate::views::{browser_panel, detail_panel};
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

const APP_TITLE: &str = "Flagdeck";

pub fn run() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = AppConfig::from_env();
    let api = match CountryApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            log::warn!("{err}, falling back to {DEFAULT_API_BASE}");
            CountryApi::new(&AppConfig {
                api_base: DEFAULT_API_BASE.to_string(),
                ..config.clone()
            })?
        }
    };
    log::info!(
        "Starting {APP_TITLE} (sample size {}, timeout {:?})",
        config.sample_size,
        config.request_timeout
    );

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(move || App::new(&config, api))?;
    Ok(())
}

pub struct App {
    api: CountryApi,
    browser: FlagBrowser,
    rng: StdRng,
}

impl App {
    pub fn new(config: &AppConfig, api: CountryApi) -> (Self, Task<Message>) {
        let mut app = Self {
            api,
            browser: FlagBrowser::new(Catalog::builtin(), config.sample_size),
            rng: StdRng::from_entropy(),
        };
        let fetches = app.browser.render_random_sample(&mut app.rng);
        let task = app.dispatch(fetches);
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => {
                let fetches = self.browser.refresh(&mut self.rng);
                self.dispatch(fetches)
            }
            Message::ShowDetail(country) => {
                let fetches = self.browser.render_detail(&country);
                self.dispatch(fetches)
            }
            Message::Return => {
                let fetches = self.browser.return_to_browser(&mut self.rng);
                self.dispatch(fetches)
            }
            Message::FlagLoaded {
                generation,
                slot,
                image,
            } => {
                self.browser.flag_loaded(generation, slot, image);
                Task::none()
            }
            Message::DetailLoaded { generation, result } => {
                let fetches = self.browser.detail_loaded(generation, result);
                self.dispatch(fetches)
            }
            Message::DetailFlagLoaded { generation, image } => {
                self.browser.detail_flag_loaded(generation, image);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            text(APP_TITLE).size(28),
            Space::with_width(Length::Fill),
            button(text("Refresh").size(14))
                .padding([6, 20])
                .on_press(Message::Refresh)
                .style(pill_button_style),
        ]
        .align_y(Alignment::Center);

        let body = match self.browser.state() {
            ViewState::Browsing => browser_panel(self.browser.cards()),
            ViewState::Viewing(_) => detail_panel(self.browser.detail()),
        };

        let content = container(body)
            .padding(8)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        column![header, scrollable(content).height(Length::Fill)]
            .padding(20)
            .spacing(20)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn dispatch(&self, fetches: Vec<Fetch>) -> Task<Message> {
        Task::batch(fetches.into_iter().map(|fetch| self.perform(fetch)))
    }

    fn perform(&self, fetch: Fetch) -> Task<Message> {
        let api = self.api.clone();
        match fetch {
            Fetch::Flag {
                generation,
                slot,
                country,
            } => Task::perform(
                async move { api.load_flag(&country).await },
                move |image| Message::FlagLoaded {
                    generation,
                    slot,
                    image,
                },
            ),
            Fetch::Detail {
                generation,
                country,
            } => Task::perform(
                async move {
                    api.fetch_detail(&country)
                        .await
                        .map_err(|err| LookupFailure::new(&country, err))
                },
                move |result| Message::DetailLoaded { generation, result },
            ),
            Fetch::DetailFlag {
                generation,
                country,
            } => Task::perform(
                async move { api.load_flag(&country).await },
                move |image| Message::DetailFlagLoaded { generation, image },
            ),
        }
    }
}
