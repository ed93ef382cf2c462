/// Package implementation for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::packuri::PACKAGE_URI;
use crate::ooxml::opc::{PackURI, PhysPkgReader, Relationships};
use crate::ooxml::pptx::format::SlideSize;
use crate::ooxml::pptx::parts::{PresentationPart, SlidePart};
use crate::ooxml::pptx::shapes::TemplateShape;
use std::path::Path;
use tracing::debug;

/// The first slide of a template presentation, ready to be merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTemplate {
    /// Top-level shapes in z-order, with inherited placeholder geometry filled in
    pub shapes: Vec<TemplateShape>,
    /// Slide size declared by the template, if any
    pub slide_size: Option<SlideSize>,
}

/// A PowerPoint (.pptx) package opened for reading.
///
/// This is the entry point for reading template presentations. It walks the
/// package relationships from `/_rels/.rels` to the presentation part and on
/// to its slides, layouts and masters.
///
/// # Examples
///
/// ```rust,no_run
/// use deckforge::ooxml::pptx::Package;
///
/// let mut pkg = Package::open("slides/title.pptx")?;
/// println!("Template has {} slides", pkg.slide_count()?);
/// if let Some(slide) = pkg.first_slide()? {
///     for shape in &slide.shapes {
///         println!("{}: {:?}", shape.name(), shape.text());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    phys: PhysPkgReader,
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            phys: PhysPkgReader::open(path)?,
        })
    }

    /// Open a .pptx package from its bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            phys: PhysPkgReader::from_bytes(data)?,
        })
    }

    /// Load the relationships of a part; a part without a `.rels` has none.
    fn rels_for(&mut self, source: &PackURI) -> Result<Relationships> {
        match self.phys.rels_xml_for(source)? {
            Some(xml) => Relationships::from_xml(&xml, source.base_uri()),
            None => Ok(Relationships::new(source.base_uri())),
        }
    }

    /// Follow the first relationship of `reltype` out of `source`.
    fn related_partname(&mut self, source: &PackURI, reltype: &str) -> Result<Option<PackURI>> {
        let rels = self.rels_for(source)?;
        match rels.first_of_type(reltype) {
            Some(rel) => rels.target_partname(rel).map(Some),
            None => Ok(None),
        }
    }

    /// Get the partname of the main presentation part.
    pub fn presentation_partname(&mut self) -> Result<PackURI> {
        let package = PackURI::new(PACKAGE_URI).map_err(OoxmlError::InvalidPackUri)?;
        self.related_partname(&package, rt::OFFICE_DOCUMENT)?
            .ok_or_else(|| OoxmlError::PartNotFound("main presentation part".to_string()))
    }

    fn presentation(&mut self) -> Result<(PackURI, PresentationPart)> {
        let partname = self.presentation_partname()?;
        let xml = self.phys.blob_for(&partname)?;
        Ok((partname, PresentationPart::from_xml(xml)))
    }

    /// Get the number of slides in the presentation.
    pub fn slide_count(&mut self) -> Result<usize> {
        let (_, presentation) = self.presentation()?;
        presentation.slide_count()
    }

    /// Load the first slide in presentation order.
    ///
    /// Returns `Ok(None)` when the presentation has no slides. Placeholders
    /// that carry no transform of their own take their position and size
    /// from the slide layout, then from the slide master.
    pub fn first_slide(&mut self) -> Result<Option<SlideTemplate>> {
        let (pres_uri, presentation) = self.presentation()?;
        let slide_size = presentation.slide_size()?;
        let Some(r_id) = presentation.slide_rids()?.into_iter().next() else {
            return Ok(None);
        };

        let pres_rels = self.rels_for(&pres_uri)?;
        let rel = pres_rels.get(&r_id).ok_or_else(|| {
            OoxmlError::InvalidRelationship(format!("slide relationship {} not found", r_id))
        })?;
        let slide_uri = pres_rels.target_partname(rel)?;
        let slide = SlidePart::from_xml(self.phys.blob_for(&slide_uri)?);
        let mut shapes = slide.shapes()?;

        if shapes
            .iter()
            .any(|shape| shape.placeholder().is_some() && shape.geometry().is_none())
        {
            self.inherit_geometry(&slide_uri, &mut shapes)?;
        }

        Ok(Some(SlideTemplate { shapes, slide_size }))
    }

    /// Fill in placeholder geometry from the slide layout and slide master.
    fn inherit_geometry(&mut self, slide_uri: &PackURI, shapes: &mut [TemplateShape]) -> Result<()> {
        let Some(layout_uri) = self.related_partname(slide_uri, rt::SLIDE_LAYOUT)? else {
            debug!(slide = %slide_uri, "slide has no layout to inherit geometry from");
            return Ok(());
        };
        let layout_shapes = self.shapes_of(&layout_uri)?;

        let master_shapes = match self.related_partname(&layout_uri, rt::SLIDE_MASTER)? {
            Some(master_uri) => self.shapes_of(&master_uri)?,
            None => Vec::new(),
        };

        for shape in shapes.iter_mut() {
            if shape.geometry().is_some() {
                continue;
            }
            let Some(ph) = shape.placeholder() else {
                continue;
            };

            let from_layout = layout_shapes.iter().find_map(|candidate| {
                let inherited = candidate.placeholder()?;
                ph.inherits_from(inherited).then(|| candidate.geometry()).flatten()
            });
            let from_master = || {
                master_shapes.iter().find_map(|candidate| {
                    let inherited = candidate.placeholder()?;
                    (inherited.master_type() == ph.master_type())
                        .then(|| candidate.geometry())
                        .flatten()
                })
            };

            if let Some(geometry) = from_layout.or_else(from_master) {
                shape.set_geometry(geometry);
            }
        }
        Ok(())
    }

    fn shapes_of(&mut self, partname: &PackURI) -> Result<Vec<TemplateShape>> {
        match self.phys.try_blob_for(partname)? {
            Some(xml) => SlidePart::from_xml(xml).shapes(),
            None => {
                debug!(part = %partname, "related part is missing from the package");
                Ok(Vec::new())
            },
        }
    }
}
