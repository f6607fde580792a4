// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::VergeError;

/// A single named polygonal region from an annotation record
///
/// The point list may be empty when the source object carried no polygon
/// element or no extractable coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedObject {
    pub name: String,
    pub points: Vec<[f32; 2]>,
}

/// A per-image annotation record parsed from a VOC-style XML document
///
/// The document holds repeated `object` elements, each with a `name` text
/// child and an optional `polygon` child whose children are `x1`, `y1`,
/// `x2`, `y2`, ... text coordinates. Coordinate pairs are read by
/// consecutive index until the first missing index, so a malformed
/// sequence with a gap truncates early rather than failing.
///
/// # Examples
///
/// ```
/// use verge_core::im::Annotation;
///
/// let xml = r#"
/// <annotation>
///   <object>
///     <name>road</name>
///     <polygon>
///       <x1>0.0</x1><y1>0.0</y1>
///       <x2>4.0</x2><y2>0.0</y2>
///       <x3>4.0</x3><y3>4.0</y3>
///     </polygon>
///   </object>
/// </annotation>"#;
///
/// let annotation = Annotation::parse(xml).unwrap();
///
/// assert_eq!(annotation.objects.len(), 1);
/// assert_eq!(annotation.objects[0].name, "road");
/// assert_eq!(annotation.objects[0].points.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub objects: Vec<AnnotatedObject>,
}

impl Annotation {
    /// Open an annotation from a provided xml path
    ///
    /// # Arguments
    ///
    /// * `path` - A path to a VOC-style xml annotation
    ///
    /// ```no_run
    /// use verge_core::im::Annotation;
    /// let annotation = Annotation::open("annotation.xml");
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Annotation, VergeError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| VergeError::AnnotationReadError(err.to_string()))?;

        Self::parse(&contents)
    }

    /// Parse an annotation from an xml string
    ///
    /// # Arguments
    ///
    /// * `xml` - A VOC-style xml document
    pub fn parse(xml: &str) -> Result<Annotation, VergeError> {
        let mut reader = Reader::from_str(xml);

        let mut objects: Vec<AnnotatedObject> = Vec::new();
        let mut stack: Vec<String> = Vec::new();

        let mut in_object = false;
        let mut name: Option<String> = None;
        let mut coordinates: BTreeMap<String, String> = BTreeMap::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

                    if !in_object && tag == "object" {
                        in_object = true;
                        name = None;
                        coordinates.clear();
                    }

                    stack.push(tag);
                }
                Ok(Event::Text(t)) if in_object => {
                    let text = t
                        .unescape()
                        .map_err(|err| VergeError::AnnotationParseError(err.to_string()))?;
                    let text = text.trim();

                    if text.is_empty() {
                        continue;
                    }

                    match stack.as_slice() {
                        [.., parent, tag] if parent.as_str() == "object" && tag.as_str() == "name" => {
                            name = Some(text.to_string());
                        }
                        [.., parent, tag] if parent.as_str() == "polygon" => {
                            coordinates.insert(tag.clone(), text.to_string());
                        }
                        _ => {}
                    }
                }
                Ok(Event::End(e)) => {
                    stack.pop();

                    if in_object && e.name().as_ref() == b"object" {
                        in_object = false;

                        if let Some(name) = name.take() {
                            objects.push(AnnotatedObject {
                                name,
                                points: extract_points(&coordinates),
                            });
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => return Err(VergeError::AnnotationParseError(err.to_string())),
            }
        }

        Ok(Annotation { objects })
    }

    /// Group the polygons of all annotated objects by their class name
    pub fn objects_by_name(&self) -> HashMap<String, Vec<Vec<[f32; 2]>>> {
        let mut grouped: HashMap<String, Vec<Vec<[f32; 2]>>> = HashMap::new();

        for object in &self.objects {
            grouped
                .entry(object.name.clone())
                .or_default()
                .push(object.points.clone());
        }

        grouped
    }
}

/// Read consecutively indexed (x{i}, y{i}) coordinate pairs until the first
/// missing or unparsable index
fn extract_points(coordinates: &BTreeMap<String, String>) -> Vec<[f32; 2]> {
    let mut points = Vec::new();

    for i in 1usize.. {
        let (Some(x), Some(y)) = (
            coordinates.get(&format!("x{}", i)),
            coordinates.get(&format!("y{}", i)),
        ) else {
            break;
        };

        let (Ok(x), Ok(y)) = (x.parse::<f32>(), y.parse::<f32>()) else {
            break;
        };

        points.push([x, y]);
    }

    points
}

#[cfg(test)]
mod test {

    use super::*;

    const TEST_XML: &str = r#"
    <annotation>
      <filename>frame_001.jpg</filename>
      <object>
        <name>road</name>
        <polygon>
          <x1>0</x1><y1>0</y1>
          <x2>10</x2><y2>0</y2>
          <x3>10</x3><y3>10</y3>
          <x4>0</x4><y4>10</y4>
        </polygon>
      </object>
      <object>
        <name>lm_solid</name>
        <polygon>
          <x1>1.5</x1><y1>1.5</y1>
          <x2>2.5</x2><y2>1.5</y2>
          <x3>2.5</x3><y3>8.0</y3>
        </polygon>
      </object>
      <object>
        <name>road</name>
      </object>
    </annotation>"#;

    #[test]
    fn test_parse_objects() {
        let annotation = Annotation::parse(TEST_XML).unwrap();

        assert_eq!(annotation.objects.len(), 3);
        assert_eq!(annotation.objects[0].name, "road");
        assert_eq!(annotation.objects[0].points.len(), 4);
        assert_eq!(annotation.objects[0].points[2], [10.0, 10.0]);
        assert_eq!(annotation.objects[1].name, "lm_solid");
        assert_eq!(annotation.objects[1].points, vec![
            [1.5, 1.5],
            [2.5, 1.5],
            [2.5, 8.0],
        ]);

        // Object without polygon data yields an empty point list
        assert_eq!(annotation.objects[2].name, "road");
        assert!(annotation.objects[2].points.is_empty());
    }

    #[test]
    fn test_parse_groups_by_name() {
        let annotation = Annotation::parse(TEST_XML).unwrap();
        let grouped = annotation.objects_by_name();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("road").unwrap().len(), 2);
        assert_eq!(grouped.get("lm_solid").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_coordinate_gap_truncates() {
        let xml = r#"
        <annotation>
          <object>
            <name>road</name>
            <polygon>
              <x1>0</x1><y1>0</y1>
              <x2>5</x2><y2>0</y2>
              <x4>5</x4><y4>5</y4>
            </polygon>
          </object>
        </annotation>"#;

        let annotation = Annotation::parse(xml).unwrap();

        // Missing x3/y3 stops extraction after the first two points
        assert_eq!(annotation.objects[0].points, vec![[0.0, 0.0], [5.0, 0.0]]);
    }

    #[test]
    fn test_parse_unparsable_coordinate_truncates() {
        let xml = r#"
        <annotation>
          <object>
            <name>road</name>
            <polygon>
              <x1>0</x1><y1>0</y1>
              <x2>abc</x2><y2>0</y2>
            </polygon>
          </object>
        </annotation>"#;

        let annotation = Annotation::parse(xml).unwrap();

        assert_eq!(annotation.objects[0].points, vec![[0.0, 0.0]]);
    }

    #[test]
    fn test_parse_malformed_xml() {
        let annotation = Annotation::parse("<annotation><object></annotation>");
        assert!(annotation.is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let annotation = Annotation::open("does_not_exist.xml");
        assert!(annotation.is_err());
    }
}
