/// Which of the two views is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Browsing,
    Viewing(String),
}

impl ViewState {
    pub fn is_browsing(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    pub fn viewing(&self) -> Option<&str> {
        match self {
            Self::Viewing(name) => Some(name),
            Self::Browsing => None,
        }
    }

    pub fn select(&mut self, country: &str) {
        *self = Self::Viewing(country.to_string());
    }

    pub fn browse(&mut self) {
        *self = Self::Browsing;
    }
}
