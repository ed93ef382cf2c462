//! Presentation template module.
//!
//! Provides the fixed parts every generated deck carries: one slide master
//! with a single blank layout, a theme and the presentation-level property
//! parts. Slides never put placeholders on the layout, so generated slides
//! show only the text boxes written to them.

/// Generate slideMaster.xml content.
///
/// The master has an empty shape tree, a color map, one layout reference
/// (`rId1`) and first-level text styles for title, body and other text.
pub fn default_slide_master_xml() -> &'static str {
    include_str!("../../../resources/slideMasters/slideMaster1.xml")
}

/// Generate the Blank slide layout XML.
pub fn blank_slide_layout_xml() -> &'static str {
    include_str!("../../../resources/slideLayouts/slideLayout1.xml")
}

/// Generate a minimal valid theme.xml content.
pub fn default_theme_xml() -> &'static str {
    include_str!("../../../resources/theme/theme1.xml")
}

/// Generate a minimal valid tableStyles.xml content.
pub fn default_table_styles_xml() -> &'static str {
    include_str!("../../../resources/tableStyles.xml")
}

/// Generate a minimal valid viewProps.xml content.
pub fn default_view_props_xml() -> &'static str {
    include_str!("../../../resources/viewProps.xml")
}

/// Generate a minimal valid presProps.xml content.
pub fn default_pres_props_xml() -> &'static str {
    include_str!("../../../resources/presProps.xml")
}
