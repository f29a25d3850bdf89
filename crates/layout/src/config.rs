/// Per-export switches that are not part of the book template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Draw `* * *` between consecutive scenes of a chapter.
    ///
    /// Defaults to `true`.
    pub include_scene_breaks: bool,
    /// Draw each scene's title above its text.
    ///
    /// Defaults to `false`.
    pub include_scene_titles: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_scene_breaks: true,
            include_scene_titles: false,
        }
    }
}
