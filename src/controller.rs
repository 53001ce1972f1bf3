//! Headless core of the application: the two-state view machine, the browser
//! cards and the detail panel. It never performs I/O itself. Every operation
//! returns the [`Fetch`] requests the shell must run, and results come back
//! through the `*_loaded` methods tagged with the generation that asked for them.

use iced::widget::image::Handle;
use rand::Rng;

use crate::api::LookupFailure;
use crate::model::{
    sample_catalog, Catalog, CountryDetail, DetailPanel, FlagCard, FlagImage, Selection,
    ViewState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Flag {
        generation: u64,
        slot: usize,
        country: String,
    },
    Detail {
        generation: u64,
        country: String,
    },
    DetailFlag {
        generation: u64,
        country: String,
    },
}

#[derive(Debug)]
pub struct FlagBrowser {
    catalog: Catalog,
    sample_size: usize,
    state: ViewState,
    cards: Vec<FlagCard>,
    detail: DetailPanel,
    generation: u64,
}

impl FlagBrowser {
    pub fn new(catalog: Catalog, sample_size: usize) -> Self {
        Self {
            catalog,
            sample_size,
            state: ViewState::default(),
            cards: Vec::new(),
            detail: DetailPanel::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn cards(&self) -> &[FlagCard] {
        &self.cards
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn render_random_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Fetch> {
        let selection = sample_catalog(&self.catalog, self.sample_size, rng);
        self.render_selection(&selection)
    }

    /// Replaces the cards with one pending card per selected country.
    pub fn render_selection(&mut self, selection: &Selection) -> Vec<Fetch> {
        self.generation += 1;
        self.state.browse();
        self.cards = selection
            .names(&self.catalog)
            .map(FlagCard::pending)
            .collect();

        log::info!(
            "Rendering {} flag cards (generation {})",
            self.cards.len(),
            self.generation
        );

        let generation = self.generation;
        self.cards
            .iter()
            .enumerate()
            .map(|(slot, card)| Fetch::Flag {
                generation,
                slot,
                country: card.country.clone(),
            })
            .collect()
    }

    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Fetch> {
        self.render_random_sample(rng)
    }

    pub fn return_to_browser<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Fetch> {
        self.render_random_sample(rng)
    }

    pub fn render_detail(&mut self, country: &str) -> Vec<Fetch> {
        self.generation += 1;
        self.cards.clear();
        self.state.select(country);
        self.detail.begin_lookup();
        log::info!("Showing detail for {country}");

        vec![Fetch::Detail {
            generation: self.generation,
            country: country.to_string(),
        }]
    }

    pub fn flag_loaded(&mut self, generation: u64, slot: usize, image: Option<Handle>) {
        if self.is_stale(generation) {
            return;
        }

        if let Some(card) = self.cards.get_mut(slot) {
            card.image = FlagImage::from_result(image);
        }
    }

    pub fn detail_loaded(
        &mut self,
        generation: u64,
        result: Result<CountryDetail, LookupFailure>,
    ) -> Vec<Fetch> {
        if self.is_stale(generation) {
            return Vec::new();
        }

        match result {
            Ok(detail) => {
                let country = detail.name.clone();
                self.detail.populate(detail);
                vec![Fetch::DetailFlag {
                    generation,
                    country,
                }]
            }
            Err(failure) => {
                failure.log();
                self.detail.lookup_failed();
                Vec::new()
            }
        }
    }

    pub fn detail_flag_loaded(&mut self, generation: u64, image: Option<Handle>) {
        if self.is_stale(generation) {
            return;
        }
        self.detail.image = FlagImage::from_result(image);
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            log::debug!(
                "Dropping result from generation {generation} (current {})",
                self.generation
            );
        }
        stale
    }
}
