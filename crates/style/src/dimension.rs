//! Named trim sizes for printed books.
use folio_types::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Digest,
    Trade,
    MassMarket,
    Hardcover,
    LargePrint,
}

impl PageSize {
    pub const ALL: [PageSize; 7] = [
        PageSize::Letter,
        PageSize::A4,
        PageSize::Digest,
        PageSize::Trade,
        PageSize::MassMarket,
        PageSize::Hardcover,
        PageSize::LargePrint,
    ];

    /// Width and height in inches.
    pub fn dimensions_in(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (8.5, 11.0),
            PageSize::A4 => (8.27, 11.69),
            PageSize::Digest => (5.5, 8.5),
            PageSize::Trade => (6.0, 9.0),
            PageSize::MassMarket => (4.25, 6.87),
            PageSize::Hardcover => (6.14, 9.21),
            PageSize::LargePrint => (7.0, 10.0),
        }
    }

    pub fn dimensions_pt(&self) -> Size {
        let (width, height) = self.dimensions_in();
        Size::from_inches(width, height)
    }

    pub fn key(&self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "a4",
            PageSize::Digest => "digest",
            PageSize::Trade => "trade",
            PageSize::MassMarket => "mass-market",
            PageSize::Hardcover => "hardcover",
            PageSize::LargePrint => "large-print",
        }
    }

    /// Looks up a page size by its template key (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|size| size.key() == key)
    }
}
