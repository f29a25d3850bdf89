pub mod font;

pub use font::{
    FontError, FontMetrics, FontProvider, FontQuery, FontSpec, InMemoryFontProvider,
    SharedFontData,
};
