use iced::widget::image::Handle;

use super::CountryDetail;

#[derive(Debug, Clone, Default)]
pub enum FlagImage {
    #[default]
    Pending,
    Loaded(Handle),
    Missing,
}

impl FlagImage {
    pub fn from_result(image: Option<Handle>) -> Self {
        match image {
            Some(handle) => Self::Loaded(handle),
            None => Self::Missing,
        }
    }

    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Self::Loaded(handle) => Some(handle),
            Self::Pending | Self::Missing => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A summary card in the flag browser.
#[derive(Debug, Clone)]
pub struct FlagCard {
    pub country: String,
    pub image: FlagImage,
}

impl FlagCard {
    pub fn pending(country: &str) -> Self {
        Self {
            country: country.to_string(),
            image: FlagImage::Pending,
        }
    }
}

/// Fields of the detail view. Values survive until the next successful lookup.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    pub detail: Option<CountryDetail>,
    pub image: FlagImage,
    pub loading: bool,
}

impl DetailPanel {
    pub fn begin_lookup(&mut self) {
        self.loading = true;
    }

    pub fn populate(&mut self, detail: CountryDetail) {
        self.detail = Some(detail);
        self.image = FlagImage::Pending;
        self.loading = false;
    }

    /// Ends a failed lookup, leaving whatever was displayed before.
    pub fn lookup_failed(&mut self) {
        self.loading = false;
    }
}
