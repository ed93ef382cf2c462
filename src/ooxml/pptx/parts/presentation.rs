/// Presentation part - the main part in a .pptx package.
///
/// Corresponds to `/ppt/presentation.xml` in the package.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::SlideSize;
use crate::ooxml::xml::{attr_value, int_attr};
use quick_xml::Reader;
use quick_xml::events::Event;

/// The main presentation part.
///
/// This part lists the slides in presentation order and declares the slide size.
#[derive(Debug, Clone)]
pub struct PresentationPart {
    xml: Vec<u8>,
}

impl PresentationPart {
    /// Create a PresentationPart from the part's XML bytes.
    pub fn from_xml(xml: Vec<u8>) -> Self {
        Self { xml }
    }

    #[inline]
    fn xml_bytes(&self) -> &[u8] {
        &self.xml
    }

    /// Get the relationship IDs of the slides, in presentation order.
    ///
    /// These are the `r:id` attributes of the `<p:sldId>` elements.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        let mut rids = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                    for attr in e.attributes() {
                        let attr = attr?;
                        // The plain `id` is the slide id; the prefixed one is the relationship.
                        if attr.key.local_name().as_ref() == b"id" && attr.key.prefix().is_some() {
                            rids.push(attr_value(&attr)?);
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(rids)
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    /// Get the slide size declared by `<p:sldSz>`, if any.
    pub fn slide_size(&self) -> Result<Option<SlideSize>> {
        let mut reader = Reader::from_reader(self.xml_bytes());
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldSz" => {
                    let width = int_attr(&e, b"cx")?;
                    let height = int_attr(&e, b"cy")?;
                    return Ok(match (width, height) {
                        (Some(width), Some(height)) if width > 0 && height > 0 => {
                            Some(SlideSize { width, height })
                        },
                        _ => None,
                    });
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESENTATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
    xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
    xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
  <p:sldIdLst>
    <p:sldId id="257" r:id="rId7"/>
    <p:sldId id="256" r:id="rId6"/>
  </p:sldIdLst>
  <p:sldSz cx="12192000" cy="6858000"/>
  <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#;

    #[test]
    fn test_slide_rids_in_presentation_order() {
        let part = PresentationPart::from_xml(PRESENTATION.as_bytes().to_vec());
        assert_eq!(part.slide_rids().unwrap(), vec!["rId7", "rId6"]);
        assert_eq!(part.slide_count().unwrap(), 2);
    }

    #[test]
    fn test_slide_size() {
        let part = PresentationPart::from_xml(PRESENTATION.as_bytes().to_vec());
        assert_eq!(
            part.slide_size().unwrap(),
            Some(SlideSize {
                width: 12_192_000,
                height: 6_858_000,
            })
        );
    }

    #[test]
    fn test_missing_slide_list() {
        let part = PresentationPart::from_xml(b"<p:presentation/>".to_vec());
        assert!(part.slide_rids().unwrap().is_empty());
        assert_eq!(part.slide_size().unwrap(), None);
    }
}
